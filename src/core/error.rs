use thiserror::Error;

/// Errors raised while preparing scoring inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("Invalid attribute `{field}`: {reason}")]
    InvalidAttribute { field: String, reason: String },
}

impl ScoringError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ScoringError::InvalidAttribute {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
