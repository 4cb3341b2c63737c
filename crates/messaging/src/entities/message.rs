use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents one direct message between the manager and a resident.
///
/// All messages sharing the same `(condo_id, resident_id)` pair form one
/// thread, ordered by insertion. Timestamps are display metadata; the row
/// id is the source of truth for thread order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// In-memory row id
    pub id: i64,
    /// Publicly accessible UUID
    pub public_id: String,
    /// Public id of the condominium
    pub condo_id: String,
    /// Public id of the resident whose thread this message belongs to
    pub resident_id: String,
    /// Message body
    pub content: String,
    /// Direction: true when authored by the manager
    pub sent_by_manager: bool,
    /// Whether the recipient has read the message
    pub read: bool,
    /// Creation timestamp
    pub created_at: String,
}

impl ChatMessage {
    /// Create a new unread message instance
    pub fn new(condo_id: &str, resident_id: &str, content: &str, sent_by_manager: bool) -> Self {
        Self {
            id: 0, // Assigned by the repository
            public_id: Uuid::new_v4().to_string(),
            condo_id: condo_id.to_string(),
            resident_id: resident_id.to_string(),
            content: content.to_string(),
            sent_by_manager,
            read: false,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Validate message content
    pub fn validate(&self) -> Result<(), String> {
        if self.content.trim().is_empty() {
            return Err("Message content cannot be empty".to_string());
        }

        if self.content.len() > 2_000 {
            return Err("Message content too long (max 2,000 characters)".to_string());
        }

        Ok(())
    }
}
