//! Event surface shared by all on-canvas controls.

use egui::Painter;

use crate::theme::GradeWidgetTheme;
use crate::types::PointerEvent;

/// A control drawn directly onto a node canvas.
///
/// Pointer positions arrive in node-local space; each control translates
/// them into its own frame. The `on_mouse_*` methods return whether the
/// event was consumed, so a host can offer an event to several
/// independently-positioned controls and stop at the first that claims it.
pub trait CanvasControl {
    /// Hit-test and begin a drag, recomputing the value from the pointer.
    fn on_mouse_down(&mut self, event: &PointerEvent) -> bool;

    /// Continue a drag. Only acts while dragging; if the primary button is
    /// no longer held, the control treats this as an implicit mouse-up.
    fn on_mouse_move(&mut self, event: &PointerEvent) -> bool;

    /// End a drag. Returns true if a drag was active.
    fn on_mouse_up(&mut self) -> bool;

    /// Paint the control at its current origin.
    fn draw(&self, painter: &Painter, theme: &GradeWidgetTheme);
}

/// Offer a mouse-down to each control in order, stopping at the first claim.
pub fn dispatch_mouse_down(
    controls: &mut [&mut dyn CanvasControl],
    event: &PointerEvent,
) -> bool {
    controls.iter_mut().any(|c| c.on_mouse_down(event))
}

/// Offer a mouse-move to each control in order, stopping at the first claim.
pub fn dispatch_mouse_move(
    controls: &mut [&mut dyn CanvasControl],
    event: &PointerEvent,
) -> bool {
    controls.iter_mut().any(|c| c.on_mouse_move(event))
}

/// Offer a mouse-up to each control in order, stopping at the first claim.
pub fn dispatch_mouse_up(controls: &mut [&mut dyn CanvasControl]) -> bool {
    controls.iter_mut().any(|c| c.on_mouse_up())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    /// Records which calls reached it; claims events when `claims` is set.
    struct Probe {
        claims: bool,
        downs: usize,
        moves: usize,
        ups: usize,
    }

    impl Probe {
        fn new(claims: bool) -> Self {
            Self {
                claims,
                downs: 0,
                moves: 0,
                ups: 0,
            }
        }
    }

    impl CanvasControl for Probe {
        fn on_mouse_down(&mut self, _event: &PointerEvent) -> bool {
            self.downs += 1;
            self.claims
        }

        fn on_mouse_move(&mut self, _event: &PointerEvent) -> bool {
            self.moves += 1;
            self.claims
        }

        fn on_mouse_up(&mut self) -> bool {
            self.ups += 1;
            self.claims
        }

        fn draw(&self, _painter: &Painter, _theme: &GradeWidgetTheme) {}
    }

    // ── Domain: dispatch ordering ──

    #[test]
    fn dispatch_stops_at_first_consumer() {
        let mut a = Probe::new(false);
        let mut b = Probe::new(true);
        let mut c = Probe::new(true);

        let event = PointerEvent::primary(pos2(0.0, 0.0));
        let consumed = dispatch_mouse_down(&mut [&mut a, &mut b, &mut c], &event);

        assert!(consumed);
        assert_eq!(a.downs, 1);
        assert_eq!(b.downs, 1);
        assert_eq!(c.downs, 0); // never reached
    }

    #[test]
    fn dispatch_returns_false_when_nobody_claims() {
        let mut a = Probe::new(false);
        let mut b = Probe::new(false);

        let event = PointerEvent::primary(pos2(0.0, 0.0));
        assert!(!dispatch_mouse_move(&mut [&mut a, &mut b], &event));
        assert_eq!(a.moves, 1);
        assert_eq!(b.moves, 1);
    }

    #[test]
    fn dispatch_mouse_up_stops_at_first_active_drag() {
        let mut a = Probe::new(true);
        let mut b = Probe::new(true);

        assert!(dispatch_mouse_up(&mut [&mut a, &mut b]));
        assert_eq!(a.ups, 1);
        assert_eq!(b.ups, 0);
    }
}
