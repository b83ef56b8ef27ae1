//! Message service.

use super::model::{DeleteSide, InboxEntry, SentEntry};
use super::repository::MessageRepository;
use crate::error::{ProfNetError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Service owning the messaging operations.
#[derive(Clone)]
pub struct MessageService {
    messages: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// Sends a message. Returns the stored message id.
    pub async fn send(&self, sender_id: &str, receiver_id: &str, contents: &str) -> Result<i64> {
        let msg_id = self.messages.insert(sender_id, receiver_id, contents).await?;
        info!(sender_id, receiver_id, msg_id, "message sent");
        Ok(msg_id)
    }

    /// Lists unread (delivered) messages for a receiver.
    pub async fn list_unread(&self, receiver_id: &str) -> Result<Vec<InboxEntry>> {
        self.messages.list_unread(receiver_id).await
    }

    /// Lists the full inbox (delivered and read) for a receiver.
    pub async fn list_inbox(&self, receiver_id: &str) -> Result<Vec<InboxEntry>> {
        self.messages.list_inbox(receiver_id).await
    }

    /// Lists sent messages still visible to the sender.
    pub async fn list_sent(&self, sender_id: &str) -> Result<Vec<SentEntry>> {
        self.messages.list_sent(sender_id).await
    }

    /// Reads a received message, marking it read on first access.
    ///
    /// # Returns
    ///
    /// - `Ok(contents)`: message visible to this receiver
    /// - `Err(NotFound)`: unknown id, someone else's message, or a message
    ///   this receiver already deleted
    pub async fn read(&self, msg_id: i64, receiver_id: &str) -> Result<String> {
        self.messages
            .mark_read(msg_id, receiver_id)
            .await?
            .ok_or_else(|| ProfNetError::not_found("message", msg_id.to_string()))
    }

    /// Views a sent message's contents without touching its read state.
    pub async fn view_sent(&self, msg_id: i64, sender_id: &str) -> Result<String> {
        self.messages
            .sent_contents(msg_id, sender_id)
            .await?
            .ok_or_else(|| ProfNetError::not_found("message", msg_id.to_string()))
    }

    /// Deletes a message from one side's view.
    ///
    /// The row survives until both sides have deleted it; a repeat delete
    /// on the same side no longer finds a visible row and fails `NotFound`.
    pub async fn delete(&self, msg_id: i64, owner_id: &str, side: DeleteSide) -> Result<()> {
        if !self.messages.soft_delete(msg_id, owner_id, side).await? {
            return Err(ProfNetError::not_found("message", msg_id.to_string()));
        }
        debug!(msg_id, owner_id, ?side, "message deleted");
        Ok(())
    }
}
