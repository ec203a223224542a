use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{PersistError, Result};
use crate::models::{Chat, ChatUpdate, Message, NewChat};
use crate::trait_client::{paginate, PersistenceClient};

#[derive(Default)]
struct MemoryStore {
    chats: HashMap<String, Chat>,
    messages: HashMap<String, Vec<Message>>,
}

/// Process-local backend used when no database is configured, and in tests
#[derive(Default)]
pub struct MemoryPersistenceClient {
    store: RwLock<MemoryStore>,
}

impl MemoryPersistenceClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceClient for MemoryPersistenceClient {
    async fn create_chat(&self, user_id: &str, chat: NewChat) -> Result<Chat> {
        let chat = Chat::new(uuid::Uuid::new_v4().simple().to_string(), user_id, chat);
        let mut store = self.store.write().await;
        store.chats.insert(chat.id.clone(), chat.clone());
        Ok(chat)
    }

    async fn get_chat(&self, chat_id: &str) -> Result<Option<Chat>> {
        Ok(self.store.read().await.chats.get(chat_id).cloned())
    }

    async fn list_chats(
        &self,
        user_id: &str,
        limit: Option<i64>,
        skip: Option<i64>,
    ) -> Result<Vec<Chat>> {
        let store = self.store.read().await;
        let mut chats: Vec<Chat> = store
            .chats
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        chats.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(paginate(chats, limit, skip))
    }

    async fn update_chat(&self, chat_id: &str, update: ChatUpdate) -> Result<Chat> {
        let mut store = self.store.write().await;
        let chat = store
            .chats
            .get_mut(chat_id)
            .ok_or_else(|| PersistError::ChatNotFound(chat_id.to_string()))?;
        chat.apply(update);
        Ok(chat.clone())
    }

    async fn delete_chat(&self, chat_id: &str, user_id: &str) -> Result<()> {
        let mut store = self.store.write().await;
        match store.chats.get(chat_id) {
            Some(chat) if chat.user_id == user_id => {
                store.chats.remove(chat_id);
                store.messages.remove(chat_id);
                Ok(())
            }
            _ => Err(PersistError::ChatNotFound(chat_id.to_string())),
        }
    }

    async fn append_message(&self, chat_id: &str, from_user: bool, content: &str) -> Result<Message> {
        let mut store = self.store.write().await;
        let chat = store
            .chats
            .get_mut(chat_id)
            .ok_or_else(|| PersistError::ChatNotFound(chat_id.to_string()))?;
        let message = Message::new(chat_id, from_user, content);
        chat.updated_at = message.timestamp;
        store
            .messages
            .entry(chat_id.to_string())
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self, chat_id: &str) -> Result<Vec<Message>> {
        Ok(self
            .store
            .read()
            .await
            .messages
            .get(chat_id)
            .cloned()
            .unwrap_or_default())
    }
}
