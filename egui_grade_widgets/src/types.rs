//! Input and value types shared by the grading controls.

use egui::Pos2;

/// Pointer button state delivered with every pointer event.
///
/// Bit 0 is the primary button. The host fills this from whatever button
/// bitmask its input layer carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonMask(pub u32);

impl ButtonMask {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);

    /// Whether the primary button is held.
    pub fn primary(self) -> bool {
        self.0 & Self::PRIMARY.0 != 0
    }
}

/// A pointer event with the position already translated into node-local
/// space by the caller.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub pos: Pos2,
    pub buttons: ButtonMask,
}

impl PointerEvent {
    pub fn new(pos: Pos2, buttons: ButtonMask) -> Self {
        Self { pos, buttons }
    }

    /// Event with the primary button held.
    pub fn primary(pos: Pos2) -> Self {
        Self::new(pos, ButtonMask::PRIMARY)
    }

    /// Event with no buttons held.
    pub fn released(pos: Pos2) -> Self {
        Self::new(pos, ButtonMask::NONE)
    }
}

/// Fire-and-forget redraw request supplied by the owning node. Safe to call
/// repeatedly within one frame.
pub type RepaintHandle = Box<dyn Fn()>;

/// Hue/saturation pair edited by the color wheel.
///
/// Hue is normalized to [0, 1); saturation to [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelValue {
    pub hue: f32,
    pub sat: f32,
}

impl WheelValue {
    pub fn new(hue: f32, sat: f32) -> Self {
        Self { hue, sat }
    }

    /// Wrap hue modulo 1 and clamp saturation to [0, 1].
    pub fn normalized(self) -> Self {
        Self {
            hue: self.hue.rem_euclid(1.0),
            sat: self.sat.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Domain: ButtonMask ──

    #[test]
    fn primary_bit_is_bit_zero() {
        assert!(ButtonMask::PRIMARY.primary());
        assert!(!ButtonMask::NONE.primary());
        assert!(ButtonMask(0b101).primary());
        assert!(!ButtonMask(0b100).primary());
    }

    // ── Domain: WheelValue normalization ──

    #[test]
    fn hue_wraps_modulo_one() {
        let v = WheelValue::new(1.25, 0.5).normalized();
        assert!((v.hue - 0.25).abs() < 1e-6);

        let v = WheelValue::new(-0.25, 0.5).normalized();
        assert!((v.hue - 0.75).abs() < 1e-6);
    }

    #[test]
    fn sat_clamps_to_unit_range() {
        assert_eq!(WheelValue::new(0.0, 1.5).normalized().sat, 1.0);
        assert_eq!(WheelValue::new(0.0, -0.5).normalized().sat, 0.0);
    }
}
