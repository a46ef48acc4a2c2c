use serde::Serialize;

/// Domain-specific error types for the rental marketplace core.
#[derive(Debug, thiserror::Error)]
pub enum RentError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Auth gateway error: {0}")]
    Auth(String),

    #[error("Location lookup failed: {0}")]
    Geo(String),

    #[error("Listing submission failed: {0}")]
    Submission(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias.
pub type RentResult<T> = Result<T, RentError>;

/// A validation failure tied to a single input field.
///
/// Validation errors block the triggering action without changing any
/// wizard or form state; the field name lets the rendering layer attach
/// the message inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
