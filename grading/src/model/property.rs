//! Flat JSON property bag carrying the grade across configure/save.

use log::warn;
use serde_json::Value;

use crate::error::GradingError;
use crate::model::bands::Grade;

/// Serialize a grade into a flat property structure keyed by band name:
/// `{"lift": {"hue": …, "sat": …, "strength": …, "luma": …}, "gamma": …,
/// "gain": …}`.
pub fn grade_to_properties(grade: &Grade) -> Result<Value, GradingError> {
    Ok(serde_json::to_value(grade.clamped())?)
}

/// Restore a grade from a flat property structure.
///
/// Missing bands or fields fall back to defaults and unknown keys are
/// ignored; out-of-range numbers are clamped rather than rejected. Only a
/// payload that is not a JSON object (or carries non-numeric values) is an
/// error, which callers log and ignore.
pub fn grade_from_properties(value: &Value) -> Result<Grade, GradingError> {
    if !value.is_object() {
        return Err(GradingError::Property(
            "grade properties must be a JSON object".to_string(),
        ));
    }
    let parsed: Grade = serde_json::from_value(value.clone())?;
    let clamped = parsed.clamped();
    if clamped != parsed {
        warn!("clamped out-of-range grade values on restore");
    }
    Ok(clamped)
}
