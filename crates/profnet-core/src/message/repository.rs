//! Message repository trait.

use super::model::{DeleteSide, InboxEntry, SentEntry};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for message persistence.
///
/// Ids come from the store's own unique id source; they are stable and
/// referenceable for the lifetime of the row. Read and delete run their
/// lookup and state change as one atomic unit so concurrent callers cannot
/// observe a half-applied transition.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts a new message (status `Delivered`, visible to both sides).
    ///
    /// # Returns
    ///
    /// The id assigned to the stored message.
    async fn insert(&self, sender_id: &str, receiver_id: &str, contents: &str) -> Result<i64>;

    /// Lists `Delivered` messages the receiver has not deleted.
    async fn list_unread(&self, receiver_id: &str) -> Result<Vec<InboxEntry>>;

    /// Lists all messages the receiver has not deleted, read or not.
    async fn list_inbox(&self, receiver_id: &str) -> Result<Vec<InboxEntry>>;

    /// Lists messages the sender has not deleted.
    async fn list_sent(&self, sender_id: &str) -> Result<Vec<SentEntry>>;

    /// Returns the contents of a receiver-visible message and transitions
    /// its status `Delivered -> Read`. Reading an already-read message
    /// changes nothing.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(contents))`: message found and (if needed) marked read
    /// - `Ok(None)`: no such message visible to this receiver
    async fn mark_read(&self, msg_id: i64, receiver_id: &str) -> Result<Option<String>>;

    /// Returns the contents of a sender-visible message, without any state
    /// transition.
    async fn sent_contents(&self, msg_id: i64, sender_id: &str) -> Result<Option<String>>;

    /// Applies a one-side delete to a message visible to that side.
    ///
    /// A visible-to-both row gains the side's marker; a row the other side
    /// already deleted is physically removed.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: the delete was applied (marked or removed)
    /// - `Ok(false)`: no row visible to this side (includes a repeat
    ///   delete on the same side)
    async fn soft_delete(&self, msg_id: i64, owner_id: &str, side: DeleteSide) -> Result<bool>;
}
