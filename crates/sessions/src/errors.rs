//! Error types for session handling.

use condoboard_directory::DirectoryError;
use thiserror::Error;

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Main error type for session handling
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No authenticated session")]
    NotAuthenticated,

    #[error("No account found for email: {email}")]
    UnknownEmail { email: String },

    #[error("Resident {id} is still awaiting approval")]
    ApprovalPending { id: String },

    #[error("No active condominium selected")]
    NoActiveCondominium,

    #[error("Permission denied: {action}")]
    PermissionDenied { action: String },

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl SessionError {
    /// Create an unknown email error
    pub fn unknown_email(email: impl Into<String>) -> Self {
        Self::UnknownEmail {
            email: email.into(),
        }
    }

    /// Create an approval pending error
    pub fn approval_pending(id: impl Into<String>) -> Self {
        Self::ApprovalPending { id: id.into() }
    }

    /// Create a permission denied error
    pub fn permission_denied(action: impl Into<String>) -> Self {
        Self::PermissionDenied {
            action: action.into(),
        }
    }
}
