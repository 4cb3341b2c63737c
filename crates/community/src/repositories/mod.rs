//! Data access layer for community collections.

pub mod meeting_repository;
pub mod notice_repository;
pub mod transaction_repository;

// Re-export all repositories
pub use meeting_repository::MeetingRepository;
pub use notice_repository::NoticeRepository;
pub use transaction_repository::TransactionRepository;
