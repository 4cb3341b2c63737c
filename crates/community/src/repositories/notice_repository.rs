//! In-memory repository for notice records.

use crate::entities::{CreateNoticeRequest, Notice};
use crate::types::CommunityResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository holding every published notice.
/// Notices are append-only and listed newest-first, pinned before the rest.
#[derive(Clone)]
pub struct NoticeRepository {
    notices: Arc<RwLock<HashMap<i64, Notice>>>,
    next_id: Arc<RwLock<i64>>,
}

impl NoticeRepository {
    pub fn new() -> Self {
        Self {
            notices: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn create(&self, request: &CreateNoticeRequest) -> CommunityResult<Notice> {
        let mut next_id = self.next_id.write().await;
        let notice_id = *next_id;
        *next_id += 1;

        let mut notice = Notice::new(request);
        notice.id = notice_id;

        let mut notices = self.notices.write().await;
        notices.insert(notice_id, notice.clone());

        Ok(notice)
    }

    pub async fn find_by_public_id(&self, public_id: &str) -> CommunityResult<Option<Notice>> {
        let notices = self.notices.read().await;
        Ok(notices
            .values()
            .find(|n| n.public_id == public_id)
            .cloned())
    }

    /// List notices of a condominium: pinned first, then newest-first.
    pub async fn list_by_condo(&self, condo_id: &str) -> CommunityResult<Vec<Notice>> {
        let notices = self.notices.read().await;
        let mut results: Vec<Notice> = notices
            .values()
            .filter(|n| n.condo_id == condo_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.pinned.cmp(&a.pinned).then(b.id.cmp(&a.id)));
        Ok(results)
    }
}
