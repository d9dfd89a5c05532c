//! Chatstore - an in-memory chat and message store
//!
//! This library tracks chats (direct conversations between two participants),
//! the ordered messages within each chat, and per-message read/unread state.
//! It is a single-process data structure with no transport or persistence
//! layer; callers supply trusted integer user IDs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod storage;

use storage::{ChatId, MessageId};

/// Result type alias for chatstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for chatstore operations
///
/// Authorization failures are reported with the same kind as non-existence
/// so that a rejected request does not reveal whether the target exists.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Requested chat does not exist, or the caller is not a participant
    #[error("Chat {0} not found")]
    ChatNotFound(ChatId),

    /// Requested message does not exist, or the caller is not its sender
    #[error("Message {0} not found")]
    MessageNotFound(MessageId),
}

/// Initialize the chatstore library with logging
pub fn init() {
    tracing_subscriber::fmt::init();
}
