//! Band identifiers and tone values for the three-way grade.

use serde::{Deserialize, Serialize};

/// One of the three tonal adjustment ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandId {
    Lift,
    Gamma,
    Gain,
}

impl BandId {
    /// Fixed band order, shared by layout and event dispatch.
    pub const ALL: [BandId; 3] = [BandId::Lift, BandId::Gamma, BandId::Gain];

    /// Lowercase key used in the property bag.
    pub fn key(self) -> &'static str {
        match self {
            BandId::Lift => "lift",
            BandId::Gamma => "gamma",
            BandId::Gain => "gain",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            BandId::Lift => "Lift",
            BandId::Gamma => "Gamma",
            BandId::Gain => "Gain",
        }
    }

    /// Strength range for this band. Gamma keeps a positive floor since its
    /// strength feeds an exponent.
    pub fn strength_range(self) -> (f32, f32) {
        match self {
            BandId::Gamma => (0.1, 2.0),
            BandId::Lift | BandId::Gain => (0.0, 2.0),
        }
    }
}

/// Adjustment values for one band.
///
/// Hue is normalized to [0, 1) and wraps; saturation lives in [0, 1],
/// strength in the band's range, luma in [-1, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneBand {
    pub hue: f32,
    pub sat: f32,
    pub strength: f32,
    pub luma: f32,
}

impl Default for ToneBand {
    fn default() -> Self {
        Self {
            hue: 0.0,
            sat: 0.0,
            strength: 1.0,
            luma: 0.0,
        }
    }
}

impl ToneBand {
    /// Normalize into the declared ranges: hue wraps modulo 1, everything
    /// else clamps. Strength limits come from the band.
    pub fn clamped(self, band: BandId) -> Self {
        let (min_strength, max_strength) = band.strength_range();
        Self {
            hue: self.hue.rem_euclid(1.0),
            sat: self.sat.clamp(0.0, 1.0),
            strength: self.strength.clamp(min_strength, max_strength),
            luma: self.luma.clamp(-1.0, 1.0),
        }
    }
}

/// The full three-band grade owned by one node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grade {
    pub lift: ToneBand,
    pub gamma: ToneBand,
    pub gain: ToneBand,
}

impl Default for Grade {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Grade {
    /// Fresh default grade. Call once per node instantiation.
    pub fn neutral() -> Self {
        Self {
            lift: ToneBand::default(),
            gamma: ToneBand::default(),
            gain: ToneBand::default(),
        }
    }

    pub fn band(&self, id: BandId) -> &ToneBand {
        match id {
            BandId::Lift => &self.lift,
            BandId::Gamma => &self.gamma,
            BandId::Gain => &self.gain,
        }
    }

    pub fn band_mut(&mut self, id: BandId) -> &mut ToneBand {
        match id {
            BandId::Lift => &mut self.lift,
            BandId::Gamma => &mut self.gamma,
            BandId::Gain => &mut self.gain,
        }
    }

    /// Every band normalized into its declared ranges.
    pub fn clamped(self) -> Self {
        Self {
            lift: self.lift.clamped(BandId::Lift),
            gamma: self.gamma.clamped(BandId::Gamma),
            gain: self.gain.clamped(BandId::Gain),
        }
    }
}
