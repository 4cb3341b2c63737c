use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a scheduled assembly or meeting.
/// Meetings are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    /// In-memory row id
    pub id: i64,
    /// Publicly accessible UUID
    pub public_id: String,
    /// Public id of the condominium
    pub condo_id: String,
    /// Meeting title
    pub title: String,
    /// Scheduled date and time (ISO string)
    pub date: String,
    /// Short description
    pub description: String,
    /// Agenda text
    pub agenda: String,
    /// Creation timestamp
    pub created_at: String,
}

/// Request to schedule a new meeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeetingRequest {
    /// Public id of the condominium
    pub condo_id: String,
    /// Meeting title
    pub title: String,
    /// Scheduled date and time (ISO string)
    pub date: String,
    /// Short description
    pub description: String,
    /// Agenda text
    pub agenda: String,
}

impl Meeting {
    /// Create a new meeting instance
    pub fn new(request: &CreateMeetingRequest) -> Self {
        Self {
            id: 0, // Assigned by the repository
            public_id: Uuid::new_v4().to_string(),
            condo_id: request.condo_id.clone(),
            title: request.title.clone(),
            date: request.date.clone(),
            description: request.description.clone(),
            agenda: request.agenda.clone(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl CreateMeetingRequest {
    /// Validate the create request
    pub fn validate(&self) -> Result<(), String> {
        if self.condo_id.trim().is_empty() {
            return Err("Meeting must belong to a condominium".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Meeting title cannot be empty".to_string());
        }

        if self.title.len() > 255 {
            return Err("Meeting title too long (max 255 characters)".to_string());
        }

        if self.date.trim().is_empty() {
            return Err("Meeting date cannot be empty".to_string());
        }

        Ok(())
    }
}
