use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a published notice on the condominium board.
/// Notices are append-only; pinned notices take display priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// In-memory row id
    pub id: i64,
    /// Publicly accessible UUID
    pub public_id: String,
    /// Public id of the condominium
    pub condo_id: String,
    /// Notice title
    pub title: String,
    /// Notice body
    pub message: String,
    /// Classification of the notice
    pub category: NoticeCategory,
    /// Pinned notices sort before everything else
    pub pinned: bool,
    /// Publication timestamp
    pub created_at: String,
}

/// Notice classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    Urgent,
    Maintenance,
    Event,
    General,
}

impl From<&str> for NoticeCategory {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "urgent" => NoticeCategory::Urgent,
            "maintenance" => NoticeCategory::Maintenance,
            "event" => NoticeCategory::Event,
            _ => NoticeCategory::General,
        }
    }
}

impl From<NoticeCategory> for String {
    fn from(category: NoticeCategory) -> Self {
        match category {
            NoticeCategory::Urgent => "urgent".to_string(),
            NoticeCategory::Maintenance => "maintenance".to_string(),
            NoticeCategory::Event => "event".to_string(),
            NoticeCategory::General => "general".to_string(),
        }
    }
}

/// Request to publish a new notice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoticeRequest {
    /// Public id of the condominium
    pub condo_id: String,
    /// Notice title
    pub title: String,
    /// Notice body
    pub message: String,
    /// Classification
    pub category: NoticeCategory,
    /// Whether the notice is pinned
    pub pinned: bool,
}

impl Notice {
    /// Create a new notice instance
    pub fn new(request: &CreateNoticeRequest) -> Self {
        Self {
            id: 0, // Assigned by the repository
            public_id: Uuid::new_v4().to_string(),
            condo_id: request.condo_id.clone(),
            title: request.title.clone(),
            message: request.message.clone(),
            category: request.category,
            pinned: request.pinned,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl CreateNoticeRequest {
    /// Validate the create request
    pub fn validate(&self) -> Result<(), String> {
        if self.condo_id.trim().is_empty() {
            return Err("Notice must belong to a condominium".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Notice title cannot be empty".to_string());
        }

        if self.title.len() > 255 {
            return Err("Notice title too long (max 255 characters)".to_string());
        }

        if self.message.trim().is_empty() {
            return Err("Notice message cannot be empty".to_string());
        }

        if self.message.len() > 10_000 {
            return Err("Notice message too long (max 10,000 characters)".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateNoticeRequest {
        CreateNoticeRequest {
            condo_id: "condo-1".to_string(),
            title: "Manutenção do Elevador".to_string(),
            message: "O elevador social estará parado na terça-feira.".to_string(),
            category: NoticeCategory::Maintenance,
            pinned: true,
        }
    }

    #[test]
    fn test_notice_creation() {
        let notice = Notice::new(&request());

        assert_eq!(notice.category, NoticeCategory::Maintenance);
        assert!(notice.pinned);
        assert!(!notice.public_id.is_empty());
    }

    #[test]
    fn test_category_conversion() {
        assert_eq!(NoticeCategory::from("urgent"), NoticeCategory::Urgent);
        assert_eq!(NoticeCategory::from("maintenance"), NoticeCategory::Maintenance);
        assert_eq!(NoticeCategory::from("event"), NoticeCategory::Event);
        assert_eq!(NoticeCategory::from("general"), NoticeCategory::General);
        assert_eq!(NoticeCategory::from("unknown"), NoticeCategory::General);

        assert_eq!(String::from(NoticeCategory::Urgent), "urgent");
        assert_eq!(String::from(NoticeCategory::General), "general");
    }

    #[test]
    fn test_create_request_validation() {
        assert!(request().validate().is_ok());

        let mut no_message = request();
        no_message.message = "".to_string();
        assert!(no_message.validate().is_err());

        let mut huge_message = request();
        huge_message.message = "a".repeat(10_001);
        assert!(huge_message.validate().is_err());
    }
}
