//! # Condoboard Dashboard Crate
//!
//! The application facade of Condoboard. Wires the directory, community,
//! messaging, session, and drafting services into one injected object,
//! enforces tenant scoping and role capabilities on every query, derives
//! the notification badges, and seeds the fixed sample data set.

pub mod dashboard;
pub mod errors;
pub mod notifications;
pub mod seed;

// Re-export main types for convenience
pub use dashboard::Dashboard;
pub use errors::{DashboardError, DashboardResult};
pub use notifications::{DashboardBadges, NotificationAggregator};
pub use seed::{load_sample_data, SeededRecords};
