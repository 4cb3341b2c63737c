//! # Condoboard Sessions Crate
//!
//! Session and scope resolution for Condoboard. Determines the active
//! condominium and the viewer identity (role plus resident id), and holds
//! the centralized capability table consulted before every role-gated
//! operation.

pub mod errors;
pub mod permissions;
pub mod session;

// Re-export main types for convenience
pub use errors::{SessionError, SessionResult};
pub use permissions::{can, ensure, Action};
pub use session::{Role, Session, SessionManager};
