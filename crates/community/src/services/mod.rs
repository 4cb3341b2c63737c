//! Business logic services for community life.

pub mod meeting_service;
pub mod notice_service;
pub mod transaction_service;

// Re-export all services
pub use meeting_service::MeetingService;
pub use notice_service::NoticeService;
pub use transaction_service::{FinancialSummary, TransactionService};
