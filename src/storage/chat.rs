//! Chat conversation management

use crate::storage::message::Message;
use crate::storage::{ChatId, MessageId, UserId};
use serde::{Deserialize, Serialize};

/// Represents a direct chat between exactly two participants
///
/// Messages are kept in append order, which is also ascending message-ID
/// order since IDs are assigned monotonically per chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    /// Chat ID, unique across the store
    pub id: ChatId,
    /// The two participant user IDs (order carries no meaning)
    pub participant_ids: [UserId; 2],
    /// Messages in this conversation, oldest first
    pub messages: Vec<Message>,
}

impl Chat {
    /// Create a new empty chat between two participants
    pub fn new(id: ChatId, sender_id: UserId, receiver_id: UserId) -> Self {
        Self {
            id,
            participant_ids: [sender_id, receiver_id],
            messages: Vec::new(),
        }
    }

    /// Check whether a user is a participant of this chat
    pub fn is_participant(&self, user_id: UserId) -> bool {
        self.participant_ids.contains(&user_id)
    }

    /// Next message ID for this chat: one past the current maximum, or 1
    /// for an empty chat
    ///
    /// Messages are appended in ID order, so the maximum is the last entry.
    pub fn next_message_id(&self) -> MessageId {
        self.messages.last().map_or(1, |msg| msg.id + 1)
    }

    /// Append a message to this chat
    pub fn append_message(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    /// Get the most recently appended message, if any
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Check whether this chat contains at least one unread message
    pub fn has_unread(&self) -> bool {
        self.messages.iter().any(Message::is_unread)
    }
}
