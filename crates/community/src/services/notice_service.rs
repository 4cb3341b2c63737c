//! Notice service for the condominium board.

use crate::entities::{CreateNoticeRequest, Notice};
use crate::repositories::NoticeRepository;
use crate::types::{CommunityError, CommunityResult};
use std::sync::Arc;
use tracing::info;

/// Service for managing notice operations
pub struct NoticeService {
    repository: Arc<NoticeRepository>,
}

impl NoticeService {
    /// Create a new notice service instance
    pub fn new(repository: Arc<NoticeRepository>) -> Self {
        Self { repository }
    }

    /// Publish a new notice
    pub async fn publish(&self, request: CreateNoticeRequest) -> CommunityResult<Notice> {
        if let Err(e) = request.validate() {
            return Err(CommunityError::validation(e));
        }

        let notice = self.repository.create(&request).await?;

        info!(
            notice = %notice.public_id,
            condo = %notice.condo_id,
            category = %String::from(notice.category),
            pinned = notice.pinned,
            "published notice"
        );

        Ok(notice)
    }

    /// Get a notice by public id
    pub async fn get(&self, public_id: &str) -> CommunityResult<Notice> {
        self.repository
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| CommunityError::notice_not_found(public_id))
    }

    /// List notices of a condominium: pinned first, then newest-first
    pub async fn list(&self, condo_id: &str) -> CommunityResult<Vec<Notice>> {
        self.repository.list_by_condo(condo_id).await
    }
}
