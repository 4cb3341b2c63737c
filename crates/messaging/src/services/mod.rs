//! Business logic services for direct messaging.

pub mod thread_service;

// Re-export all services
pub use thread_service::{ThreadService, ThreadSummary};
