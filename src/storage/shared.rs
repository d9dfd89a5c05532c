//! Thread-safe chat store wrapper for concurrent callers
//!
//! The store's operations routinely read then mutate nested state, so the
//! wrapper guards the whole store behind one exclusive lock rather than
//! trying to lock per chat.

use crate::storage::chat::Chat;
use crate::storage::message::Message;
use crate::storage::store::{ChatStore, SendOutcome};
use crate::storage::{ChatId, MessageId, UserId};
use crate::Result;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle to a [`ChatStore`] for concurrent access
///
/// Cloning the handle shares the underlying store. Every method takes the
/// lock for the full duration of the operation, so ID assignment and
/// read-marking stay atomic across threads.
///
/// # Example
/// ```rust
/// use chatstore::storage::SharedChatStore;
///
/// let store = SharedChatStore::new();
/// let chat = store.create_chat(1, 2, "Hello!");
///
/// let worker = store.clone();
/// let handle = std::thread::spawn(move || worker.chats_for_user(2));
/// let chats = handle.join().unwrap();
/// assert_eq!(chats[0].id, chat.id);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedChatStore {
    /// Shared store state
    store: Arc<Mutex<ChatStore>>,
}

impl SharedChatStore {
    /// Create a shared handle around a new empty store
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(ChatStore::new())),
        }
    }

    /// Wrap an existing store in a shared handle
    pub fn from_store(store: ChatStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    // A poisoned lock only means another caller panicked mid-operation;
    // every store operation leaves the data consistent, so keep serving it.
    fn lock(&self) -> MutexGuard<'_, ChatStore> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create a new chat between two users, seeded with a first message
    pub fn create_chat(&self, sender_id: UserId, receiver_id: UserId, text: &str) -> Chat {
        self.lock().create_chat(sender_id, receiver_id, text)
    }

    /// Send a message into a chat, creating a new chat when none matches
    pub fn send_message(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        chat_id: Option<ChatId>,
        text: &str,
    ) -> SendOutcome {
        self.lock().send_message(sender_id, receiver_id, chat_id, text)
    }

    /// Get snapshots of every chat the user participates in
    pub fn chats_for_user(&self, user_id: UserId) -> Vec<Chat> {
        self.lock().chats_for_user(user_id)
    }

    /// Get snapshots of the user's chats with at least one unread message
    pub fn unread_chats_for_user(&self, user_id: UserId) -> Vec<Chat> {
        self.lock().unread_chats_for_user(user_id)
    }

    /// Get the last message text of each chat the user participates in
    pub fn last_messages(&self, user_id: UserId) -> Vec<String> {
        self.lock().last_messages(user_id)
    }

    /// Retrieve a window of messages from a chat, marking them read
    ///
    /// # Errors
    /// Returns [`crate::Error::ChatNotFound`] if no chat has the given ID.
    pub fn messages_from_chat(
        &self,
        user_id: UserId,
        chat_id: ChatId,
        message_id: MessageId,
        count: usize,
    ) -> Result<Vec<Message>> {
        self.lock().messages_from_chat(user_id, chat_id, message_id, count)
    }

    /// Delete one of the caller's own messages
    ///
    /// # Errors
    /// Returns [`crate::Error::MessageNotFound`] if the message is unknown
    /// or the caller is not its sender.
    pub fn delete_message(&self, user_id: UserId, message_id: MessageId) -> Result<()> {
        self.lock().delete_message(user_id, message_id)
    }

    /// Delete a chat the caller participates in
    ///
    /// # Errors
    /// Returns [`crate::Error::ChatNotFound`] if the chat is unknown or the
    /// caller is not a participant.
    pub fn delete_chat(&self, user_id: UserId, chat_id: ChatId) -> Result<()> {
        self.lock().delete_chat(user_id, chat_id)
    }

    /// Number of chats currently in the store
    pub fn chat_count(&self) -> usize {
        self.lock().chat_count()
    }

    /// Run several operations under one lock acquisition
    ///
    /// Useful when a caller needs a consistent read-modify sequence that
    /// spans multiple store operations.
    pub fn with<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut ChatStore) -> T,
    {
        f(&mut self.lock())
    }
}
