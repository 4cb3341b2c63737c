//! Error types for the condominium directory.

use thiserror::Error;

/// Result type alias for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Main error type for the condominium directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Condominium not found: {id}")]
    CondominiumNotFound { id: String },

    #[error("Resident not found: {id}")]
    ResidentNotFound { id: String },

    #[error("Provider not found: {id}")]
    ProviderNotFound { id: String },

    #[error("Email already registered: {email}")]
    EmailAlreadyExists { email: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid status transition: resident {id} is {status}")]
    InvalidTransition { id: String, status: String },
}

impl DirectoryError {
    /// Create a not found error for condominiums
    pub fn condominium_not_found(id: impl Into<String>) -> Self {
        Self::CondominiumNotFound { id: id.into() }
    }

    /// Create a not found error for residents
    pub fn resident_not_found(id: impl Into<String>) -> Self {
        Self::ResidentNotFound { id: id.into() }
    }

    /// Create a not found error for providers
    pub fn provider_not_found(id: impl Into<String>) -> Self {
        Self::ProviderNotFound { id: id.into() }
    }

    /// Create a duplicate email error
    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an invalid transition error
    pub fn invalid_transition(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self::InvalidTransition {
            id: id.into(),
            status: status.into(),
        }
    }
}
