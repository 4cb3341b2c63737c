//! # Condoboard Community Crate
//!
//! Meetings, notices, and the financial ledger of a condominium. Each
//! collection is scoped by `condo_id`, append-only, and held in memory
//! for the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Entities**: Domain models (Meeting, Notice, Transaction)
//! - **Repositories**: In-memory data access layer
//! - **Services**: Business logic layer, including the derived
//!   financial summary
//! - **Types**: Shared types and errors

pub mod entities;
pub mod repositories;
pub mod services;
pub mod types;

// Re-export main types for convenience
pub use entities::{
    CreateMeetingRequest, CreateNoticeRequest, CreateTransactionRequest, Meeting, Notice,
    NoticeCategory, Transaction, TransactionKind,
};
pub use repositories::{MeetingRepository, NoticeRepository, TransactionRepository};
pub use services::{FinancialSummary, MeetingService, NoticeService, TransactionService};
pub use types::{CommunityError, CommunityResult};
