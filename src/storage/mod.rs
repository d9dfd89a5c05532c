//! In-memory chat storage module
//!
//! This module holds the whole chat/message data model and the store that
//! owns it:
//! - `chat` - Chat conversations between two participants
//! - `message` - Message structures and read-state tracking
//! - `store` - The `ChatStore` registry, sole owner of all chats
//! - `shared` - Thread-safe `SharedChatStore` wrapper for concurrent callers

// Submodules
pub mod chat;
pub mod message;
pub mod shared;
pub mod store;

// Re-export commonly used types
pub use chat::Chat;
pub use message::Message;
pub use shared::SharedChatStore;
pub use store::{ChatStore, SendOutcome, NO_MESSAGES_PLACEHOLDER};

/// User identifier, a trusted positive integer supplied by the caller
pub type UserId = u64;

/// Chat identifier, unique across the store and never reused
pub type ChatId = u64;

/// Message identifier, unique within its owning chat
pub type MessageId = u64;
