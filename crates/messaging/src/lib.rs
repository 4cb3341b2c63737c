//! # Condoboard Messaging Crate
//!
//! Direct messaging between the manager and individual residents. Each
//! `(condo_id, resident_id)` pair forms one thread; insertion order is
//! the source of truth for thread reconstruction, and read state follows
//! read-by-recipient semantics.
//!
//! ## Architecture
//!
//! - **Entities**: Domain models (ChatMessage)
//! - **Repositories**: In-memory data access layer
//! - **Services**: Thread operations, read-state tracking, inbox ordering
//! - **Types**: Shared types and errors

pub mod entities;
pub mod repositories;
pub mod services;
pub mod types;

// Re-export main types for convenience
pub use entities::ChatMessage;
pub use repositories::MessageRepository;
pub use services::{ThreadService, ThreadSummary};
pub use types::{MessagingError, MessagingResult};
