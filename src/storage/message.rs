//! Message structures and read-state tracking

use crate::storage::{ChatId, MessageId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single message inside a chat
///
/// The message ID is unique within its owning chat only; messages in
/// different chats may share an ID. A message starts out unread and
/// can only transition to read, never back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message ID, assigned per chat starting at 1
    pub id: MessageId,
    /// ID of the chat that owns this message
    pub chat_id: ChatId,
    /// User ID of the sender
    pub sender_id: UserId,
    /// Message text
    pub text: String,
    /// Whether the message has not yet been read
    pub unread: bool,
    /// Timestamp of when the message was stored
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Create a new unread message
    pub fn new(id: MessageId, chat_id: ChatId, sender_id: UserId, text: String) -> Self {
        Self {
            id,
            chat_id,
            sender_id,
            text,
            unread: true,
            sent_at: Utc::now(),
        }
    }

    /// Mark this message as read
    ///
    /// The transition is one-way: a read message never becomes unread again.
    pub fn mark_read(&mut self) {
        self.unread = false;
    }

    /// Check whether this message is still unread
    pub fn is_unread(&self) -> bool {
        self.unread
    }
}
