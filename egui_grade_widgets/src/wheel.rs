//! Polar hue/saturation picker: a hue ring with a draggable puck.

use std::f32::consts::{PI, TAU};

use egui::{Color32, Painter, Pos2, Shape, Stroke, Vec2, ecolor::Hsva, vec2};

use crate::control::CanvasControl;
use crate::theme::GradeWidgetTheme;
use crate::types::{PointerEvent, RepaintHandle, WheelValue};

/// Radius of the hue ring.
pub const OUTER_RADIUS: f32 = 60.0;
/// Radius of the disc masking the ring's inner edge.
pub const INNER_RADIUS: f32 = 40.0;
/// Travel limit of the puck; also the interactive radius.
pub const PUCK_TRAVEL_RADIUS: f32 = INNER_RADIUS - 5.0;
/// Rotation applied so hue 0 points up.
pub const ROTATION_OFFSET: f32 = -PI / 2.0;
/// Side of the wheel's square bounding box.
pub const WHEEL_DIAMETER: f32 = OUTER_RADIUS * 2.0;

/// Puck dot radius.
const PUCK_RADIUS: f32 = 6.0;
/// Angular overlap between adjacent hue wedges, hides hairline seams.
const SEGMENT_OVERLAP: f32 = 0.002;

/// Value-changed callback, invoked synchronously after every drag update.
pub type WheelCallback = Box<dyn FnMut(WheelValue)>;

fn polar(radius: f32, angle: f32) -> Vec2 {
    vec2(radius * angle.cos(), radius * angle.sin())
}

/// Polar color picker mapping a pointer offset to a hue/saturation pair.
///
/// The outer hue ring is read-only decoration; only the puck travel disc
/// hit-tests. Positions are node-local, with `origin` at the top-left of
/// the wheel's [`WHEEL_DIAMETER`]-sized bounding box.
pub struct ColorWheel {
    name: String,
    origin: Pos2,
    value: WheelValue,
    dragging: bool,
    callback: Option<WheelCallback>,
    repaint: Option<RepaintHandle>,
}

impl ColorWheel {
    pub fn new(name: impl Into<String>, value: WheelValue) -> Self {
        Self {
            name: name.into(),
            origin: Pos2::ZERO,
            value: value.normalized(),
            dragging: false,
            callback: None,
            repaint: None,
        }
    }

    /// Register the value-changed callback.
    pub fn with_callback(mut self, callback: impl FnMut(WheelValue) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Register the owner's redraw request.
    pub fn with_repaint(mut self, repaint: impl Fn() + 'static) -> Self {
        self.repaint = Some(Box::new(repaint));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> WheelValue {
        self.value
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    /// Programmatic setter used when restoring state or syncing from a
    /// companion control. Wraps hue, clamps saturation, never fires the
    /// callback.
    pub fn set_value(&mut self, value: WheelValue) {
        self.value = value.normalized();
        self.request_repaint();
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    fn center(&self) -> Pos2 {
        self.origin + vec2(OUTER_RADIUS, OUTER_RADIUS)
    }

    fn local(&self, pos: Pos2) -> Vec2 {
        pos - self.center()
    }

    /// True within the puck travel disc.
    fn hit_test(&self, local: Vec2) -> bool {
        local.length() <= PUCK_TRAVEL_RADIUS
    }

    /// Map a center-relative offset to a hue/saturation pair. The angle is
    /// rotated so hue 0 points up and normalized into [0, 2π); the distance
    /// is clamped to the travel radius.
    pub fn value_from_point(local: Vec2) -> WheelValue {
        let dist = local.length().min(PUCK_TRAVEL_RADIUS);
        let mut angle = local.y.atan2(local.x) - ROTATION_OFFSET;
        if angle < 0.0 {
            angle += TAU;
        }
        WheelValue {
            hue: angle / TAU,
            sat: dist / PUCK_TRAVEL_RADIUS,
        }
    }

    /// Inverse of [`ColorWheel::value_from_point`]; center-relative puck
    /// position for the current value.
    pub fn point_from_value(&self) -> Vec2 {
        let angle = self.value.hue * TAU + ROTATION_OFFSET;
        polar(self.value.sat * PUCK_TRAVEL_RADIUS, angle)
    }

    fn update_from(&mut self, local: Vec2) {
        self.value = Self::value_from_point(local);
        let value = self.value;
        if let Some(callback) = &mut self.callback {
            callback(value);
        }
    }

    fn request_repaint(&self) {
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }
}

impl CanvasControl for ColorWheel {
    fn on_mouse_down(&mut self, event: &PointerEvent) -> bool {
        let local = self.local(event.pos);
        if !self.hit_test(local) {
            return false;
        }
        self.dragging = true;
        self.update_from(local);
        self.request_repaint();
        true
    }

    fn on_mouse_move(&mut self, event: &PointerEvent) -> bool {
        if !self.dragging {
            return false;
        }
        if !event.buttons.primary() {
            self.on_mouse_up();
            return false;
        }
        let local = self.local(event.pos);
        self.update_from(local);
        self.request_repaint();
        true
    }

    fn on_mouse_up(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        self.request_repaint();
        true
    }

    fn draw(&self, painter: &Painter, theme: &GradeWidgetTheme) {
        let center = self.center();

        // Hue ring: 360 one-degree wedges at full saturation and value.
        for deg in 0..360u32 {
            let start = (deg as f32).to_radians() + ROTATION_OFFSET - SEGMENT_OVERLAP;
            let end = ((deg + 1) as f32).to_radians() + ROTATION_OFFSET + SEGMENT_OVERLAP;
            let color = Color32::from(Hsva::new(deg as f32 / 360.0, 1.0, 1.0, 1.0));
            painter.add(Shape::convex_polygon(
                vec![
                    center,
                    center + polar(OUTER_RADIUS, start),
                    center + polar(OUTER_RADIUS, end),
                ],
                color,
                Stroke::NONE,
            ));
        }

        // Disc masking the wedge fan down to a ring.
        painter.circle_filled(center, INNER_RADIUS, theme.wheel_face_color);

        // Travel limit and crosshair guides.
        painter.circle_stroke(
            center,
            PUCK_TRAVEL_RADIUS,
            Stroke::new(1.0, theme.wheel_guide_color),
        );
        let guide = Stroke::new(1.0, theme.wheel_crosshair_color);
        painter.line_segment(
            [
                center - vec2(PUCK_TRAVEL_RADIUS, 0.0),
                center + vec2(PUCK_TRAVEL_RADIUS, 0.0),
            ],
            guide,
        );
        painter.line_segment(
            [
                center - vec2(0.0, PUCK_TRAVEL_RADIUS),
                center + vec2(0.0, PUCK_TRAVEL_RADIUS),
            ],
            guide,
        );

        // Puck.
        let puck = center + self.point_from_value();
        painter.circle_filled(puck, PUCK_RADIUS, theme.puck_color);
        painter.circle_stroke(puck, PUCK_RADIUS, Stroke::new(2.0, theme.puck_outline_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn wheel_with_log() -> (ColorWheel, Rc<RefCell<Vec<WheelValue>>>) {
        let log: Rc<RefCell<Vec<WheelValue>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let wheel = ColorWheel::new("lift_wheel", WheelValue::default())
            .with_callback(move |v| sink.borrow_mut().push(v));
        (wheel, log)
    }

    /// Node-local position at a center-relative offset, origin at zero.
    fn at(dx: f32, dy: f32) -> Pos2 {
        pos2(OUTER_RADIUS + dx, OUTER_RADIUS + dy)
    }

    // ── Domain: value_from_point ──

    #[test]
    fn rightward_offset_maps_to_quarter_hue_full_sat() {
        // (35, 0) sits on the travel limit; the -π/2 rotation puts it a
        // quarter turn from hue zero.
        let v = ColorWheel::value_from_point(vec2(PUCK_TRAVEL_RADIUS, 0.0));
        assert!((v.hue - 0.25).abs() < 1e-6);
        assert!((v.sat - 1.0).abs() < 1e-6);
    }

    #[test]
    fn upward_offset_maps_to_hue_zero() {
        let v = ColorWheel::value_from_point(vec2(0.0, -10.0));
        assert!(v.hue.abs() < 1e-6 || (v.hue - 1.0).abs() < 1e-6);
    }

    #[test]
    fn distance_beyond_travel_radius_clamps_sat() {
        let v = ColorWheel::value_from_point(vec2(0.0, 200.0));
        assert!((v.sat - 1.0).abs() < 1e-6);
    }

    #[test]
    fn center_maps_to_zero_sat() {
        let v = ColorWheel::value_from_point(vec2(0.0, 0.0));
        assert_eq!(v.sat, 0.0);
    }

    #[test]
    fn hue_stays_in_unit_interval() {
        for deg in 0..=720 {
            let angle = (deg as f32).to_radians();
            let v = ColorWheel::value_from_point(polar(20.0, angle));
            assert!((0.0..1.0 + 1e-6).contains(&v.hue), "hue {} at {}°", v.hue, deg);
        }
    }

    // ── Domain: round trip ──

    #[test]
    fn hue_round_trips_through_point_mapping() {
        let mut wheel = ColorWheel::new("w", WheelValue::default());
        for deg in (0..360).step_by(7) {
            let hue = deg as f32 / 360.0;
            wheel.set_value(WheelValue::new(hue, 0.8));
            let recovered = ColorWheel::value_from_point(wheel.point_from_value());
            let delta = (recovered.hue - hue).abs();
            let wrapped = delta.min((delta - 1.0).abs());
            assert!(wrapped < 1e-4, "hue {} recovered as {}", hue, recovered.hue);
            assert!((recovered.sat - 0.8).abs() < 1e-4);
        }
    }

    // ── Domain: drag lifecycle ──

    #[test]
    fn down_inside_travel_disc_claims_and_fires_callback() {
        let (mut wheel, log) = wheel_with_log();
        let consumed = wheel.on_mouse_down(&PointerEvent::primary(at(PUCK_TRAVEL_RADIUS, 0.0)));
        assert!(consumed);
        assert!(wheel.dragging());

        let fired = log.borrow();
        assert_eq!(fired.len(), 1);
        assert!((fired[0].hue - 0.25).abs() < 1e-6);
        assert!((fired[0].sat - 1.0).abs() < 1e-6);
    }

    #[test]
    fn down_on_decorative_ring_is_not_consumed() {
        // Between the travel limit (35) and the outer ring (60).
        let (mut wheel, log) = wheel_with_log();
        assert!(!wheel.on_mouse_down(&PointerEvent::primary(at(50.0, 0.0))));
        assert!(!wheel.dragging());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let (mut wheel, log) = wheel_with_log();
        assert!(!wheel.on_mouse_move(&PointerEvent::primary(at(0.0, 0.0))));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn losing_primary_button_is_an_implicit_mouse_up() {
        let (mut wheel, log) = wheel_with_log();
        wheel.on_mouse_down(&PointerEvent::primary(at(10.0, 0.0)));
        assert!(wheel.dragging());

        let consumed = wheel.on_mouse_move(&PointerEvent::released(at(20.0, 0.0)));
        assert!(!consumed);
        assert!(!wheel.dragging());
        // Only the mouse-down update fired.
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn up_without_down_is_a_no_op() {
        let (mut wheel, log) = wheel_with_log();
        assert!(!wheel.on_mouse_up());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn drag_updates_value_on_every_move() {
        let (mut wheel, log) = wheel_with_log();
        wheel.on_mouse_down(&PointerEvent::primary(at(10.0, 0.0)));
        assert!(wheel.on_mouse_move(&PointerEvent::primary(at(0.0, 17.5))));
        assert!(wheel.on_mouse_up());

        let fired = log.borrow();
        assert_eq!(fired.len(), 2);
        // (0, 17.5) points down: half a turn from hue zero, half saturation.
        assert!((fired[1].hue - 0.5).abs() < 1e-6);
        assert!((fired[1].sat - 0.5).abs() < 1e-6);
    }

    // ── Domain: programmatic set ──

    #[test]
    fn set_value_normalizes_and_stays_silent() {
        let (mut wheel, log) = wheel_with_log();
        wheel.set_value(WheelValue::new(1.75, 2.0));
        assert!((wheel.value().hue - 0.75).abs() < 1e-6);
        assert_eq!(wheel.value().sat, 1.0);
        assert!(log.borrow().is_empty());
    }
}
