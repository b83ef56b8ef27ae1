//! Message domain models.
//!
//! Soft delete is per side: each row carries a delete state that hides it
//! from one side at a time. The row is physically removed once both sides
//! have deleted it, and the state never moves backwards.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Read state of a message. `Delivered` until the receiver reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum MessageStatus {
    Delivered,
    Read,
}

/// Which side of a conversation an owner is acting as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteSide {
    Sender,
    Receiver,
}

/// Soft-delete state of a message row.
///
/// The stored integer values are part of the persisted schema: 0 visible
/// to both, 1 sender-deleted, 2 receiver-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteState {
    Visible,
    SenderDeleted,
    ReceiverDeleted,
}

impl DeleteState {
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Visible => 0,
            Self::SenderDeleted => 1,
            Self::ReceiverDeleted => 2,
        }
    }

    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Visible),
            1 => Some(Self::SenderDeleted),
            2 => Some(Self::ReceiverDeleted),
            _ => None,
        }
    }

    /// The marker a delete on `side` writes into a visible-to-both row.
    pub fn marker(side: DeleteSide) -> Self {
        match side {
            DeleteSide::Sender => Self::SenderDeleted,
            DeleteSide::Receiver => Self::ReceiverDeleted,
        }
    }

    /// Whether a row in this state is still visible to `side`.
    ///
    /// The receiver sees rows the receiver has not deleted ({0,1}); the
    /// sender sees rows the sender has not deleted ({0,2}).
    pub fn visible_to(self, side: DeleteSide) -> bool {
        match side {
            DeleteSide::Sender => matches!(self, Self::Visible | Self::ReceiverDeleted),
            DeleteSide::Receiver => matches!(self, Self::Visible | Self::SenderDeleted),
        }
    }
}

/// A full message row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub msg_id: i64,
    pub sender_id: String,
    pub receiver_id: String,
    pub contents: String,
    pub status: MessageStatus,
    pub delete_state: DeleteState,
}

/// One inbox listing line: the message and its sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxEntry {
    pub msg_id: i64,
    pub sender_id: String,
    pub status: MessageStatus,
}

/// One sent listing line: the message and its receiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentEntry {
    pub msg_id: i64,
    pub receiver_id: String,
    pub status: MessageStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_is_per_side() {
        assert!(DeleteState::Visible.visible_to(DeleteSide::Sender));
        assert!(DeleteState::Visible.visible_to(DeleteSide::Receiver));
        // A sender delete hides the row from the sender only.
        assert!(!DeleteState::SenderDeleted.visible_to(DeleteSide::Sender));
        assert!(DeleteState::SenderDeleted.visible_to(DeleteSide::Receiver));
        assert!(DeleteState::ReceiverDeleted.visible_to(DeleteSide::Sender));
        assert!(!DeleteState::ReceiverDeleted.visible_to(DeleteSide::Receiver));
    }

    #[test]
    fn stored_values_roundtrip() {
        for state in [
            DeleteState::Visible,
            DeleteState::SenderDeleted,
            DeleteState::ReceiverDeleted,
        ] {
            assert_eq!(DeleteState::from_i64(state.as_i64()), Some(state));
        }
        assert_eq!(DeleteState::from_i64(3), None);
    }
}
