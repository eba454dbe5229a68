//! UI error types

use thiserror::Error;

/// Errors that can occur while running the finder
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event reading failed
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
