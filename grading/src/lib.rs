//! Core lift/gamma/gain grading model.
//!
//! GUI-free: the band data model with its range invariants, the flat
//! property-bag round trip used for node configure/save, and the color math
//! that turns band values into per-channel factors applied to linear RGB
//! images.

pub mod error;
pub mod grade;
pub mod model;

pub use error::GradingError;
pub use grade::{GradeFactors, gain_rgb, gamma_rgb, lift_rgb};
pub use model::bands::{BandId, Grade, ToneBand};
pub use model::property::{grade_from_properties, grade_to_properties};
