//! Lift/gamma/gain color math over linear RGB.
//!
//! Band values convert to per-channel factors on a cosine color circle: the
//! red, green and blue channels sample the hue angle a third of a turn
//! apart, scaled by saturation.

use std::f32::consts::TAU;

use image::Rgb32FImage;

use crate::model::bands::{Grade, ToneBand};

/// Smallest base fed into the power curve.
const POW_FLOOR: f32 = 0.001;
/// Floor under the per-channel gamma factor; keeps the exponent finite.
const GAMMA_FLOOR: f32 = 0.1;

fn chroma_offsets(hue: f32, sat: f32) -> [f32; 3] {
    let angle = hue * TAU;
    [
        angle.cos() * sat,
        (angle - TAU / 3.0).cos() * sat,
        (angle + TAU / 3.0).cos() * sat,
    ]
}

/// Additive shadow offsets.
pub fn lift_rgb(band: &ToneBand) -> [f32; 3] {
    chroma_offsets(band.hue, band.sat).map(|c| c * band.strength * 0.5)
}

/// Midtone power factors.
pub fn gamma_rgb(band: &ToneBand) -> [f32; 3] {
    chroma_offsets(band.hue, band.sat)
        .map(|c| (1.0 + c * (band.strength - 1.0) * 2.0).max(GAMMA_FLOOR))
}

/// Multiplicative highlight factors.
pub fn gain_rgb(band: &ToneBand) -> [f32; 3] {
    chroma_offsets(band.hue, band.sat).map(|c| 1.0 + c * band.strength)
}

/// Per-channel factors precomputed once per grade application.
pub struct GradeFactors {
    lift: [f32; 3],
    inv_gamma: [f32; 3],
    gain: [f32; 3],
    lift_luma: f32,
    gamma_luma: f32,
    gain_luma: f32,
}

impl GradeFactors {
    pub fn from_grade(grade: &Grade) -> Self {
        Self {
            lift: lift_rgb(&grade.lift),
            inv_gamma: gamma_rgb(&grade.gamma).map(|g| 1.0 / g),
            gain: gain_rgb(&grade.gain),
            lift_luma: grade.lift.luma,
            gamma_luma: grade.gamma.luma,
            gain_luma: grade.gain.luma,
        }
    }

    /// Apply the fixed pipeline to one linear RGB pixel: lift add, gamma
    /// power, gain multiply, with the luma offsets between stages; the
    /// result clamps into [0, 1].
    pub fn transform(&self, rgb: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0_f32; 3];
        for c in 0..3 {
            let mut v = rgb[c] + self.lift[c] + self.lift_luma;
            v = v.max(POW_FLOOR).powf(self.inv_gamma[c]);
            v += self.gamma_luma;
            v *= self.gain[c];
            v += self.gain_luma;
            out[c] = v.clamp(0.0, 1.0);
        }
        out
    }
}

impl Grade {
    /// Apply this grade to every pixel of a linear RGB image.
    pub fn apply(&self, image: &mut Rgb32FImage) {
        let factors = GradeFactors::from_grade(self);
        for pixel in image.pixels_mut() {
            pixel.0 = factors.transform(pixel.0);
        }
    }
}
