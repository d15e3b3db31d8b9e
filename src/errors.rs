use thiserror::Error;

/// Error taxonomy for the scoring engine.
///
/// Only `KnowledgeBase` aborts a run. `Validation` is a per-article outcome
/// and `InputParse` a per-channel outcome; the batch processor records both
/// and keeps going.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),
    #[error("Input parse error: {0}")]
    InputParse(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        AppError::Validation(value)
    }
}
