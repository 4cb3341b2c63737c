//! In-memory repository for meeting records.

use crate::entities::{CreateMeetingRequest, Meeting};
use crate::types::CommunityResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository holding every scheduled meeting.
/// Meetings are immutable once created.
#[derive(Clone)]
pub struct MeetingRepository {
    meetings: Arc<RwLock<HashMap<i64, Meeting>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MeetingRepository {
    pub fn new() -> Self {
        Self {
            meetings: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn create(&self, request: &CreateMeetingRequest) -> CommunityResult<Meeting> {
        let mut next_id = self.next_id.write().await;
        let meeting_id = *next_id;
        *next_id += 1;

        let mut meeting = Meeting::new(request);
        meeting.id = meeting_id;

        let mut meetings = self.meetings.write().await;
        meetings.insert(meeting_id, meeting.clone());

        Ok(meeting)
    }

    pub async fn find_by_public_id(&self, public_id: &str) -> CommunityResult<Option<Meeting>> {
        let meetings = self.meetings.read().await;
        Ok(meetings
            .values()
            .find(|m| m.public_id == public_id)
            .cloned())
    }

    /// List meetings of a condominium in creation order.
    pub async fn list_by_condo(&self, condo_id: &str) -> CommunityResult<Vec<Meeting>> {
        let meetings = self.meetings.read().await;
        let mut results: Vec<Meeting> = meetings
            .values()
            .filter(|m| m.condo_id == condo_id)
            .cloned()
            .collect();
        results.sort_by_key(|m| m.id);
        Ok(results)
    }
}
