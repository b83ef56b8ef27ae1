//! Messaging: send, listings, read transition, and per-side soft delete.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{DeleteSide, DeleteState, InboxEntry, Message, MessageStatus, SentEntry};
pub use repository::MessageRepository;
pub use service::MessageService;
