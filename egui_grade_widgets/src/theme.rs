//! Theming for the grading controls.

use egui::Color32;

/// Colors shared by the color wheel and the value slider.
pub struct GradeWidgetTheme {
    /// Fill of the disc masking the hue ring's inner edge.
    pub wheel_face_color: Color32,
    /// Circle marking the puck travel limit.
    pub wheel_guide_color: Color32,
    /// Crosshair guide lines inside the wheel.
    pub wheel_crosshair_color: Color32,
    /// Puck fill.
    pub puck_color: Color32,
    /// Puck outline.
    pub puck_outline_color: Color32,
    /// Slider track fill.
    pub track_color: Color32,
    /// Slider knob fill.
    pub knob_color: Color32,
    /// Slider knob outline.
    pub knob_outline_color: Color32,
    /// Control label text.
    pub label_color: Color32,
    /// Numeric value text under the slider label.
    pub value_text_color: Color32,
}

impl Default for GradeWidgetTheme {
    fn default() -> Self {
        Self {
            wheel_face_color: Color32::from_rgb(42, 42, 42),
            wheel_guide_color: Color32::from_rgb(68, 68, 68),
            wheel_crosshair_color: Color32::from_rgb(102, 102, 102),
            puck_color: Color32::WHITE,
            puck_outline_color: Color32::BLACK,
            track_color: Color32::from_rgb(68, 68, 68),
            knob_color: Color32::from_rgb(221, 221, 221),
            knob_outline_color: Color32::BLACK,
            label_color: Color32::from_rgb(238, 238, 238),
            value_text_color: Color32::from_rgb(204, 204, 204),
        }
    }
}
