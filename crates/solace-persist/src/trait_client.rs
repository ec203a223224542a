use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Chat, ChatUpdate, Message, NewChat};

/// Trait for chat/message persistence operations
///
/// Implementations provide storage-specific CRUD operations.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Create a chat owned by `user_id`
    async fn create_chat(&self, user_id: &str, chat: NewChat) -> Result<Chat>;

    /// Get a chat by ID
    async fn get_chat(&self, chat_id: &str) -> Result<Option<Chat>>;

    /// List chats for a user, most recently updated first
    async fn list_chats(
        &self,
        user_id: &str,
        limit: Option<i64>,
        skip: Option<i64>,
    ) -> Result<Vec<Chat>>;

    /// Update title and/or preview
    async fn update_chat(&self, chat_id: &str, update: ChatUpdate) -> Result<Chat>;

    /// Delete a chat and its messages
    async fn delete_chat(&self, chat_id: &str, user_id: &str) -> Result<()>;

    /// Append a message to a chat
    async fn append_message(&self, chat_id: &str, from_user: bool, content: &str) -> Result<Message>;

    /// All messages of a chat in chronological order
    async fn list_messages(&self, chat_id: &str) -> Result<Vec<Message>>;
}

/// Apply skip/limit to an already sorted list
pub(crate) fn paginate<T>(items: Vec<T>, limit: Option<i64>, skip: Option<i64>) -> Vec<T> {
    let skip = skip.and_then(|s| usize::try_from(s).ok()).unwrap_or(0);
    let iter = items.into_iter().skip(skip);
    match limit.and_then(|l| usize::try_from(l).ok()) {
        Some(limit) => iter.take(limit).collect(),
        None => iter.collect(),
    }
}
