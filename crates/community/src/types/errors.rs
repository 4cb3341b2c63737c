//! Error types for the community crate.

use thiserror::Error;

/// Result type alias for community operations
pub type CommunityResult<T> = Result<T, CommunityError>;

/// Main error type for meetings, notices, and transactions
#[derive(Debug, Error)]
pub enum CommunityError {
    #[error("Meeting not found: {id}")]
    MeetingNotFound { id: String },

    #[error("Notice not found: {id}")]
    NoticeNotFound { id: String },

    #[error("Transaction not found: {id}")]
    TransactionNotFound { id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl CommunityError {
    /// Create a not found error for meetings
    pub fn meeting_not_found(id: impl Into<String>) -> Self {
        Self::MeetingNotFound { id: id.into() }
    }

    /// Create a not found error for notices
    pub fn notice_not_found(id: impl Into<String>) -> Self {
        Self::NoticeNotFound { id: id.into() }
    }

    /// Create a not found error for transactions
    pub fn transaction_not_found(id: impl Into<String>) -> Self {
        Self::TransactionNotFound { id: id.into() }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
