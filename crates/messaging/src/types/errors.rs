//! Error types for the messaging crate.

use thiserror::Error;

/// Result type alias for messaging operations
pub type MessagingResult<T> = Result<T, MessagingError>;

/// Main error type for direct messaging
#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl MessagingError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
