//! Error handling for cs50ai-store
//!
//! Wraps cs50ai-core ExError with store-specific helpers

use cs50ai_core::errors::{AiError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a puzzle validation error
pub fn puzzle_invalid(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidPuzzle)
        .with_op("puzzle_parse")
        .with_message(reason.to_string())
}

/// Wrap a core failure met while building a puzzle
pub fn puzzle_rejected(err: AiError) -> ExError {
    ExError::new(ExErrorKind::InvalidPuzzle)
        .with_op("puzzle_parse")
        .with_message("puzzle rejected")
        .with_source(err.into())
}

/// Create a configuration validation error
pub fn config_invalid(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("config_load")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
