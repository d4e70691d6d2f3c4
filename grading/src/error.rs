use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradingError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Property error: {0}")]
    Property(String),
}
