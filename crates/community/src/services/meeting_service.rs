//! Meeting service for scheduling assemblies.

use crate::entities::{CreateMeetingRequest, Meeting};
use crate::repositories::MeetingRepository;
use crate::types::{CommunityError, CommunityResult};
use std::sync::Arc;
use tracing::info;

/// Service for managing meeting operations
pub struct MeetingService {
    repository: Arc<MeetingRepository>,
}

impl MeetingService {
    /// Create a new meeting service instance
    pub fn new(repository: Arc<MeetingRepository>) -> Self {
        Self { repository }
    }

    /// Schedule a new meeting
    pub async fn schedule(&self, request: CreateMeetingRequest) -> CommunityResult<Meeting> {
        if let Err(e) = request.validate() {
            return Err(CommunityError::validation(e));
        }

        let meeting = self.repository.create(&request).await?;

        info!(meeting = %meeting.public_id, condo = %meeting.condo_id, "scheduled meeting");
        Ok(meeting)
    }

    /// Get a meeting by public id
    pub async fn get(&self, public_id: &str) -> CommunityResult<Meeting> {
        self.repository
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| CommunityError::meeting_not_found(public_id))
    }

    /// List meetings of a condominium
    pub async fn list(&self, condo_id: &str) -> CommunityResult<Vec<Meeting>> {
        self.repository.list_by_condo(condo_id).await
    }
}
