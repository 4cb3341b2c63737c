//! Domain entities for community life: meetings, notices, and the
//! financial ledger.

pub mod meeting;
pub mod notice;
pub mod transaction;

// Re-export all entity types
pub use meeting::{CreateMeetingRequest, Meeting};
pub use notice::{CreateNoticeRequest, Notice, NoticeCategory};
pub use transaction::{CreateTransactionRequest, Transaction, TransactionKind};
