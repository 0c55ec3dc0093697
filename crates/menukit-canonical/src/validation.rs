use thiserror::Error;

/// Errors raised when a checked identifier is constructed from bad input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not match the identifier's pattern.
    #[error("{field} ('{value}') does not match the required pattern")]
    PatternMismatch {
        /// Identifier kind that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// The value was empty after trimming.
    #[error("{field} must not be empty")]
    Empty {
        /// Identifier kind that failed validation.
        field: &'static str,
    },
}
