//! Validation error types

/// Validation error type
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid drift threshold: {0} (must be a finite number >= 0)")]
    InvalidThreshold(f64),

    #[error("Invalid minimum batch size: {0} (must be > 0)")]
    InvalidMinBatch(usize),

    #[error("Column name for {0} must not be empty")]
    EmptyColumnName(&'static str),

    #[error("Path for {0} must not be empty")]
    EmptyPath(&'static str),
}

impl ValidationError {
    /// Config field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidThreshold(_) => "drift.threshold",
            ValidationError::InvalidMinBatch(_) => "drift.min_batch",
            ValidationError::EmptyColumnName(field) | ValidationError::EmptyPath(field) => field,
        }
    }
}

impl From<ValidationError> for crate::error::Error {
    fn from(err: ValidationError) -> Self {
        crate::error::Error::config(err.field(), err.to_string())
    }
}
