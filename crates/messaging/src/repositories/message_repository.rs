//! In-memory repository for chat messages.

use crate::entities::ChatMessage;
use crate::types::MessagingResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository holding every chat message across all condominiums.
/// Messages are append-only; only the `read` flag ever changes.
#[derive(Clone)]
pub struct MessageRepository {
    messages: Arc<RwLock<HashMap<i64, ChatMessage>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn append(&self, message: ChatMessage) -> MessagingResult<ChatMessage> {
        let mut next_id = self.next_id.write().await;
        let message_id = *next_id;
        *next_id += 1;

        let mut message = message;
        message.id = message_id;

        let mut messages = self.messages.write().await;
        messages.insert(message_id, message.clone());

        Ok(message)
    }

    /// A thread's messages in insertion order.
    pub async fn thread(&self, condo_id: &str, resident_id: &str) -> MessagingResult<Vec<ChatMessage>> {
        let messages = self.messages.read().await;
        let mut results: Vec<ChatMessage> = messages
            .values()
            .filter(|m| m.condo_id == condo_id && m.resident_id == resident_id)
            .cloned()
            .collect();
        results.sort_by_key(|m| m.id);
        Ok(results)
    }

    /// Mark every message in a thread with the given direction as read.
    /// Returns how many messages were flipped.
    pub async fn mark_read(
        &self,
        condo_id: &str,
        resident_id: &str,
        sent_by_manager: bool,
    ) -> MessagingResult<usize> {
        let mut messages = self.messages.write().await;
        let mut flipped = 0;

        for message in messages.values_mut() {
            if message.condo_id == condo_id
                && message.resident_id == resident_id
                && message.sent_by_manager == sent_by_manager
                && !message.read
            {
                message.read = true;
                flipped += 1;
            }
        }

        Ok(flipped)
    }

    /// Count unread messages with the given direction in one thread.
    pub async fn unread_count(
        &self,
        condo_id: &str,
        resident_id: &str,
        sent_by_manager: bool,
    ) -> MessagingResult<usize> {
        let messages = self.messages.read().await;
        Ok(messages
            .values()
            .filter(|m| {
                m.condo_id == condo_id
                    && m.resident_id == resident_id
                    && m.sent_by_manager == sent_by_manager
                    && !m.read
            })
            .count())
    }

    /// Count unread messages with the given direction across every thread
    /// of a condominium.
    pub async fn unread_count_by_condo(
        &self,
        condo_id: &str,
        sent_by_manager: bool,
    ) -> MessagingResult<usize> {
        let messages = self.messages.read().await;
        Ok(messages
            .values()
            .filter(|m| m.condo_id == condo_id && m.sent_by_manager == sent_by_manager && !m.read)
            .count())
    }
}
