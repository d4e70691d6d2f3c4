//! Hidden numeric companion widgets for the grade node.
//!
//! The node keeps these values as a second copy of the grade, synchronized
//! manually in both directions: numeric edits reach the canvas controls
//! through their silent set path, and control drags write back into the
//! copy through the widget callbacks.

use egui::DragValue;

use egui_grade_widgets::WheelValue;
use grading::BandId;

use super::adapter::GradeNode;

/// Drag speed for hue/saturation, matching their fine-grained step.
const CHROMA_SPEED: f64 = 0.001;
/// Drag speed for strength/luma.
const SCALAR_SPEED: f64 = 0.01;

pub fn show(node: &mut GradeNode, ui: &mut egui::Ui) {
    let before = node.numeric_values();
    let mut edited = before;

    egui::Grid::new("grade_numeric")
        .num_columns(5)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("");
            ui.label("Hue");
            ui.label("Sat");
            ui.label("Strength");
            ui.label("Luma");
            ui.end_row();

            for band in BandId::ALL {
                ui.label(band.label());
                let values = edited.band_mut(band);
                ui.add(
                    DragValue::new(&mut values.hue)
                        .speed(CHROMA_SPEED)
                        .range(0.0..=1.0),
                );
                ui.add(
                    DragValue::new(&mut values.sat)
                        .speed(CHROMA_SPEED)
                        .range(0.0..=1.0),
                );
                let (strength_min, strength_max) = band.strength_range();
                ui.add(
                    DragValue::new(&mut values.strength)
                        .speed(SCALAR_SPEED)
                        .range(strength_min..=strength_max),
                );
                ui.add(
                    DragValue::new(&mut values.luma)
                        .speed(SCALAR_SPEED)
                        .range(-1.0..=1.0),
                );
                ui.end_row();
            }
        });

    // Propagate edits into the bag and the matching controls.
    for band in BandId::ALL {
        let prev = *before.band(band);
        let next = *edited.band(band);
        if prev.hue != next.hue || prev.sat != next.sat {
            node.set_wheel_from_numeric(band, WheelValue::new(next.hue, next.sat));
        }
        if prev.strength != next.strength {
            node.set_strength_from_numeric(band, next.strength);
        }
        if prev.luma != next.luma {
            node.set_luma_from_numeric(band, next.luma);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use egui_kittest::kittest::Queryable;

    // ── Domain: rendering ──

    #[test]
    fn renders_one_row_per_band() {
        let harness = Harness::builder()
            .with_size(egui::vec2(420.0, 300.0))
            .build_ui(|ui| {
                let mut node = GradeNode::new(ui.ctx());
                show(&mut node, ui);
            });
        assert!(harness.query_by_label("Lift").is_some());
        assert!(harness.query_by_label("Gamma").is_some());
        assert!(harness.query_by_label("Gain").is_some());
    }

    #[test]
    fn renders_the_parameter_columns() {
        let harness = Harness::builder()
            .with_size(egui::vec2(420.0, 300.0))
            .build_ui(|ui| {
                let mut node = GradeNode::new(ui.ctx());
                show(&mut node, ui);
            });
        assert!(harness.query_by_label("Hue").is_some());
        assert!(harness.query_by_label("Sat").is_some());
        assert!(harness.query_by_label("Strength").is_some());
        assert!(harness.query_by_label("Luma").is_some());
    }
}
