//! Thread service: sending, read-state tracking, and the manager's inbox
//! ordering.

use crate::entities::ChatMessage;
use crate::repositories::MessageRepository;
use crate::types::{MessagingError, MessagingResult};
use chrono::{DateTime, Utc};
use condoboard_sessions::Role;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// One row of the manager's inbox view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadSummary {
    /// Public id of the resident behind the thread
    pub resident_id: String,
    /// Timestamp of the most recent message, if any
    pub last_message_at: Option<String>,
    /// Unread resident-authored messages in the thread
    pub unread_from_resident: usize,
}

/// Service for direct-message threads between the manager and residents.
///
/// Read state follows read-by-recipient semantics: a reader only ever
/// marks the other party's messages, never their own.
pub struct ThreadService {
    repository: Arc<MessageRepository>,
}

impl ThreadService {
    /// Create a new thread service instance
    pub fn new(repository: Arc<MessageRepository>) -> Self {
        Self { repository }
    }

    /// Append a message to a resident's thread.
    /// The direction comes from the sender's role; new messages are
    /// always unread.
    pub async fn send(
        &self,
        condo_id: &str,
        resident_id: &str,
        content: &str,
        sender: Role,
    ) -> MessagingResult<ChatMessage> {
        let message = ChatMessage::new(condo_id, resident_id, content, sender == Role::Manager);

        if let Err(e) = message.validate() {
            return Err(MessagingError::validation(e));
        }

        let message = self.repository.append(message).await?;

        info!(
            message = %message.public_id,
            condo = %condo_id,
            resident = %resident_id,
            from_manager = message.sent_by_manager,
            "sent message"
        );

        Ok(message)
    }

    /// A thread's messages in insertion order
    pub async fn thread(
        &self,
        condo_id: &str,
        resident_id: &str,
    ) -> MessagingResult<Vec<ChatMessage>> {
        self.repository.thread(condo_id, resident_id).await
    }

    /// Mark every message authored by the other party as read.
    /// Returns how many messages were flipped.
    pub async fn mark_thread_read(
        &self,
        condo_id: &str,
        resident_id: &str,
        reader: Role,
    ) -> MessagingResult<usize> {
        let mark_manager_authored = reader == Role::Resident;
        let flipped = self
            .repository
            .mark_read(condo_id, resident_id, mark_manager_authored)
            .await?;

        if flipped > 0 {
            info!(
                condo = %condo_id,
                resident = %resident_id,
                reader = %String::from(reader),
                flipped,
                "marked thread read"
            );
        }

        Ok(flipped)
    }

    /// Unread resident-authored messages in one thread (manager view)
    pub async fn unread_from_resident(
        &self,
        condo_id: &str,
        resident_id: &str,
    ) -> MessagingResult<usize> {
        self.repository
            .unread_count(condo_id, resident_id, false)
            .await
    }

    /// Unread resident-authored messages across every thread of a
    /// condominium (manager badge)
    pub async fn unread_from_residents_total(&self, condo_id: &str) -> MessagingResult<usize> {
        self.repository.unread_count_by_condo(condo_id, false).await
    }

    /// Unread manager-authored messages in one thread (resident badge)
    pub async fn unread_from_manager(
        &self,
        condo_id: &str,
        resident_id: &str,
    ) -> MessagingResult<usize> {
        self.repository
            .unread_count(condo_id, resident_id, true)
            .await
    }

    /// Build the manager's inbox: one summary per given resident, ordered
    /// by most recent message descending. Residents without messages are
    /// kept and sort last (their timestamp counts as the epoch).
    pub async fn thread_overview(
        &self,
        condo_id: &str,
        resident_ids: &[String],
    ) -> MessagingResult<Vec<ThreadSummary>> {
        let mut summaries = Vec::with_capacity(resident_ids.len());

        for resident_id in resident_ids {
            let thread = self.repository.thread(condo_id, resident_id).await?;
            let last_message_at = thread.last().map(|m| m.created_at.clone());
            let unread_from_resident = self
                .repository
                .unread_count(condo_id, resident_id, false)
                .await?;

            summaries.push(ThreadSummary {
                resident_id: resident_id.clone(),
                last_message_at,
                unread_from_resident,
            });
        }

        summaries.sort_by_key(|s| {
            let last = s
                .last_message_at
                .as_deref()
                .and_then(|ts| ts.parse::<DateTime<Utc>>().ok())
                .unwrap_or_default();
            std::cmp::Reverse(last)
        });

        Ok(summaries)
    }
}
