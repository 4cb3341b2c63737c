//! Error type for the dashboard facade.

use condoboard_community::CommunityError;
use condoboard_directory::DirectoryError;
use condoboard_messaging::MessagingError;
use condoboard_sessions::SessionError;
use thiserror::Error;

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Aggregated error type surfaced by the facade.
/// Every variant maps to a dismissible user notification; none is fatal.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Community(#[from] CommunityError),

    #[error(transparent)]
    Messaging(#[from] MessagingError),
}
