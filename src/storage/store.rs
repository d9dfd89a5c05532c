//! The chat store: registry and sole owner of all chats
//!
//! Every mutation of chats and messages goes through [`ChatStore`]; the
//! entities themselves are plain data. All query results are point-in-time
//! snapshots (clones), so callers can never mutate store state through a
//! returned value.

use crate::storage::chat::Chat;
use crate::storage::message::Message;
use crate::storage::{ChatId, MessageId, UserId};
use crate::{Error, Result};

/// Placeholder text reported for a chat that has no messages yet
pub const NO_MESSAGES_PLACEHOLDER: &str = "<no messages>";

/// Outcome of a send-or-create message delivery
///
/// Sending into a missing chat falls back to creating a fresh chat between
/// the two users; the variants make that branch visible to the caller
/// instead of silently swallowing it.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// The message was appended to an existing chat
    Appended {
        /// Chat the message went into
        chat_id: ChatId,
        /// ID assigned to the new message
        message_id: MessageId,
    },
    /// No chat matched, so a new one was created holding the message
    ChatCreated(Chat),
}

/// In-memory registry of chats and their messages
///
/// Chat IDs come from a persistent counter and are never reused, even after
/// the highest-numbered chat is deleted. Message IDs are derived per chat
/// (max + 1) and are only unique within their chat.
///
/// # Example
/// ```rust
/// use chatstore::storage::ChatStore;
///
/// let mut store = ChatStore::new();
/// let chat = store.create_chat(1, 2, "Hello!");
///
/// // Reading a window of messages marks them read
/// let messages = store.messages_from_chat(2, chat.id, 1, 10)?;
/// assert!(!messages[0].unread);
/// assert!(store.unread_chats_for_user(2).is_empty());
/// # Ok::<(), chatstore::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ChatStore {
    /// All chats in creation order
    chats: Vec<Chat>,
    /// Highest chat ID ever assigned; 0 before the first chat
    last_chat_id: ChatId,
}

impl ChatStore {
    /// Create a new empty chat store
    pub fn new() -> Self {
        Self {
            chats: Vec::new(),
            last_chat_id: 0,
        }
    }

    /// Create a new chat between two users, seeded with a first message
    ///
    /// The chat gets the next never-used chat ID and one unread message
    /// (ID 1) from `sender_id`. Returns a snapshot of the created chat.
    pub fn create_chat(&mut self, sender_id: UserId, receiver_id: UserId, text: &str) -> Chat {
        self.last_chat_id += 1;
        let mut chat = Chat::new(self.last_chat_id, sender_id, receiver_id);
        let msg = Message::new(chat.next_message_id(), chat.id, sender_id, text.to_string());
        chat.append_message(msg);

        tracing::info!(
            "Created chat {} between users {} and {}",
            chat.id,
            sender_id,
            receiver_id
        );
        self.chats.push(chat.clone());
        chat
    }

    /// Send a message into a chat, creating a new chat when none matches
    ///
    /// When `chat_id` names an existing chat the message is appended there
    /// with the chat's next message ID. When `chat_id` is `None` or stale,
    /// the call falls back to [`ChatStore::create_chat`] for the two users.
    /// Sender membership of an existing chat is not re-validated; callers
    /// are expected to pass a participant.
    pub fn send_message(
        &mut self,
        sender_id: UserId,
        receiver_id: UserId,
        chat_id: Option<ChatId>,
        text: &str,
    ) -> SendOutcome {
        let pos = chat_id.and_then(|id| self.chats.iter().position(|c| c.id == id));
        match pos {
            Some(pos) => {
                let chat = &mut self.chats[pos];
                let msg = Message::new(chat.next_message_id(), chat.id, sender_id, text.to_string());
                let message_id = msg.id;
                let chat_id = chat.id;
                chat.append_message(msg);
                tracing::debug!("Appended message {} to chat {}", message_id, chat_id);
                SendOutcome::Appended { chat_id, message_id }
            }
            None => SendOutcome::ChatCreated(self.create_chat(sender_id, receiver_id, text)),
        }
    }

    /// Get snapshots of every chat the user participates in, in creation order
    pub fn chats_for_user(&self, user_id: UserId) -> Vec<Chat> {
        self.chats
            .iter()
            .filter(|chat| chat.is_participant(user_id))
            .cloned()
            .collect()
    }

    /// Get snapshots of the user's chats that contain at least one unread message
    pub fn unread_chats_for_user(&self, user_id: UserId) -> Vec<Chat> {
        self.chats
            .iter()
            .filter(|chat| chat.is_participant(user_id) && chat.has_unread())
            .cloned()
            .collect()
    }

    /// Get the last message text of each chat the user participates in
    ///
    /// Chats with no messages are reported as [`NO_MESSAGES_PLACEHOLDER`].
    pub fn last_messages(&self, user_id: UserId) -> Vec<String> {
        self.chats
            .iter()
            .filter(|chat| chat.is_participant(user_id))
            .map(|chat| {
                chat.last_message()
                    .map_or_else(|| NO_MESSAGES_PLACEHOLDER.to_string(), |msg| msg.text.clone())
            })
            .collect()
    }

    /// Retrieve a window of messages from a chat, marking them read
    ///
    /// Selects messages with `id >= message_id` in ascending ID order, at
    /// most `count` of them. Each selected message is marked read in the
    /// store before its snapshot is returned; viewing is what flips the
    /// unread flag. A `message_id` past the newest message, or a `count` of
    /// zero, yields an empty window.
    ///
    /// # Arguments
    /// * `user_id` - The viewer, for logging only; not used to authorize the read
    /// * `chat_id` - Chat to read from
    /// * `message_id` - Lowest message ID to include
    /// * `count` - Maximum number of messages to return
    ///
    /// # Errors
    /// Returns [`Error::ChatNotFound`] if no chat has the given ID.
    pub fn messages_from_chat(
        &mut self,
        user_id: UserId,
        chat_id: ChatId,
        message_id: MessageId,
        count: usize,
    ) -> Result<Vec<Message>> {
        let chat = self
            .chats
            .iter_mut()
            .find(|c| c.id == chat_id)
            .ok_or(Error::ChatNotFound(chat_id))?;

        let selected: Vec<Message> = chat
            .messages
            .iter_mut()
            .filter(|msg| msg.id >= message_id)
            .take(count)
            .map(|msg| {
                msg.mark_read();
                msg.clone()
            })
            .collect();

        tracing::debug!(
            "User {} read {} message(s) from chat {} starting at {}",
            user_id,
            selected.len(),
            chat_id,
            message_id
        );
        Ok(selected)
    }

    /// Delete one of the caller's own messages
    ///
    /// The owning chat is found by scanning all chats for the message ID;
    /// the chat itself survives even when its last message is removed.
    ///
    /// # Errors
    /// Returns [`Error::MessageNotFound`] if no message has the given ID or
    /// the caller is not its sender. The two cases are deliberately
    /// indistinguishable so a rejection does not reveal whether the message
    /// exists.
    pub fn delete_message(&mut self, user_id: UserId, message_id: MessageId) -> Result<()> {
        for chat in &mut self.chats {
            if let Some(pos) = chat.messages.iter().position(|msg| msg.id == message_id) {
                if chat.messages[pos].sender_id != user_id {
                    return Err(Error::MessageNotFound(message_id));
                }
                chat.messages.remove(pos);
                tracing::debug!("User {} deleted message {} from chat {}", user_id, message_id, chat.id);
                return Ok(());
            }
        }
        Err(Error::MessageNotFound(message_id))
    }

    /// Delete a chat the caller participates in, along with all its messages
    ///
    /// # Errors
    /// Returns [`Error::ChatNotFound`] if no chat has the given ID or the
    /// caller is not a participant; the two cases are indistinguishable so
    /// non-members cannot probe for chat existence.
    pub fn delete_chat(&mut self, user_id: UserId, chat_id: ChatId) -> Result<()> {
        let pos = self
            .chats
            .iter()
            .position(|chat| chat.id == chat_id)
            .ok_or(Error::ChatNotFound(chat_id))?;
        if !self.chats[pos].is_participant(user_id) {
            return Err(Error::ChatNotFound(chat_id));
        }
        self.chats.remove(pos);
        tracing::info!("User {} deleted chat {}", user_id, chat_id);
        Ok(())
    }

    /// Get a reference to a chat by ID
    pub fn chat(&self, chat_id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|chat| chat.id == chat_id)
    }

    /// Number of chats currently in the store
    pub fn chat_count(&self) -> usize {
        self.chats.len()
    }

    /// Check whether the store holds no chats
    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }
}
