//! Derived notification badges.
//!
//! Badges are pure views over the current store state, recomputed on
//! every read. Nothing here is cached, so a mutation is visible in the
//! very next read.

use std::sync::Arc;

use condoboard_directory::ResidentService;
use condoboard_messaging::ThreadService;
use condoboard_sessions::{Role, Session};
use serde::{Deserialize, Serialize};

use crate::errors::DashboardResult;

/// Badge counters shown in the dashboard header
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardBadges {
    /// Residents awaiting approval in the active condominium
    /// (always 0 for residents)
    pub pending_approvals: usize,
    /// Unread messages addressed to the viewer
    pub unread_messages: usize,
}

/// Recomputes badge counters from the live collections
pub struct NotificationAggregator {
    residents: Arc<ResidentService>,
    threads: Arc<ThreadService>,
}

impl NotificationAggregator {
    pub fn new(residents: Arc<ResidentService>, threads: Arc<ThreadService>) -> Self {
        Self { residents, threads }
    }

    /// Compute the badges for the given viewer and condominium scope
    pub async fn badges(
        &self,
        session: &Session,
        condo_id: &str,
    ) -> DashboardResult<DashboardBadges> {
        match session.role {
            Role::Manager => Ok(DashboardBadges {
                pending_approvals: self.residents.count_pending(condo_id).await?,
                unread_messages: self.threads.unread_from_residents_total(condo_id).await?,
            }),
            Role::Resident => {
                let unread = match session.resident_id.as_deref() {
                    Some(resident_id) => {
                        self.threads.unread_from_manager(condo_id, resident_id).await?
                    }
                    None => 0,
                };
                Ok(DashboardBadges {
                    pending_approvals: 0,
                    unread_messages: unread,
                })
            }
        }
    }
}
