use thiserror::Error;

/// Custom error type for the GradRust framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradRustError {
    #[error("Dimension mismatch: expected {expected}, got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Unknown activation: {0}")]
    UnknownActivation(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
