use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;

use crate::cache::store::LocalCache;
use crate::error::{PersistError, Result};
use crate::models::{Chat, ChatUpdate, Message, NewChat};
use crate::trait_client::{paginate, PersistenceClient};

const LOCAL_ID_PREFIXES: [&str; 2] = ["chat-", "sample-"];

/// Whether an id was issued by the remote backend rather than minted locally
pub fn is_backend_chat_id(chat_id: &str) -> bool {
    !chat_id.is_empty() && !LOCAL_ID_PREFIXES.iter().any(|p| chat_id.starts_with(p))
}

/// `chat-<unix millis>-<9 lowercase base36 chars>`
pub fn generate_local_chat_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .map(|b| (b as char).to_ascii_lowercase())
        .take(9)
        .collect();
    format!("chat-{}-{}", chrono::Utc::now().timestamp_millis(), suffix)
}

/// Remote-first persistence with a local mirror used as offline fallback
///
/// Chats created while the remote is unreachable get a local id and live only
/// in the cache. Remote reads refresh the mirror; remote failures fall back to
/// it. Nothing here reconciles local chats back to the remote.
pub struct CachedPersistenceClient {
    remote: Arc<dyn PersistenceClient>,
    cache: LocalCache,
}

impl CachedPersistenceClient {
    pub fn new(remote: Arc<dyn PersistenceClient>, cache: LocalCache) -> Self {
        Self { remote, cache }
    }

    pub fn cache(&self) -> &LocalCache {
        &self.cache
    }

    async fn mirror_chat(&self, chat: &Chat) {
        if let Err(e) = self.cache.save_chat(chat.clone()).await {
            tracing::warn!(chat_id = %chat.id, error = %e, "Failed to mirror chat locally");
        }
    }
}

/// Keep the first occurrence of every id
fn dedup_chats(chats: Vec<Chat>) -> Vec<Chat> {
    let mut seen = HashSet::new();
    chats
        .into_iter()
        .filter(|chat| {
            let fresh = seen.insert(chat.id.clone());
            if !fresh {
                tracing::debug!(chat_id = %chat.id, "Removing duplicate chat");
            }
            fresh
        })
        .collect()
}

fn sort_newest_first(chats: &mut [Chat]) {
    chats.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

#[async_trait]
impl PersistenceClient for CachedPersistenceClient {
    async fn create_chat(&self, user_id: &str, new_chat: NewChat) -> Result<Chat> {
        let chat = match self.remote.create_chat(user_id, new_chat.clone()).await {
            Ok(chat) => {
                tracing::info!(chat_id = %chat.id, "Created backend chat");
                chat
            }
            Err(e) => {
                let chat = Chat::new(generate_local_chat_id(), user_id, new_chat);
                tracing::warn!(chat_id = %chat.id, error = %e, "Backend unavailable, created local chat");
                chat
            }
        };
        self.mirror_chat(&chat).await;
        Ok(chat)
    }

    async fn get_chat(&self, chat_id: &str) -> Result<Option<Chat>> {
        if is_backend_chat_id(chat_id) {
            match self.remote.get_chat(chat_id).await {
                Ok(Some(chat)) => return Ok(Some(chat)),
                Ok(None) => {}
                Err(e) => tracing::warn!(chat_id = %chat_id, error = %e, "Backend lookup failed, using cache"),
            }
        }
        Ok(self.cache.chat(chat_id).await)
    }

    async fn list_chats(
        &self,
        user_id: &str,
        limit: Option<i64>,
        skip: Option<i64>,
    ) -> Result<Vec<Chat>> {
        let cached = self.cache.chats().await;

        let remote = match self.remote.list_chats(user_id, None, None).await {
            Ok(chats) => {
                tracing::info!(count = chats.len(), "Loaded chats from backend");
                Some(chats)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Backend chat list failed, using local cache");
                None
            }
        };

        let merged = match remote {
            Some(remote_chats) => {
                let local_only = cached
                    .iter()
                    .filter(|c| c.user_id == user_id && !is_backend_chat_id(&c.id))
                    .cloned();
                let mut merged = dedup_chats(remote_chats.into_iter().chain(local_only).collect());
                sort_newest_first(&mut merged);

                let others = cached.iter().filter(|c| c.user_id != user_id).cloned();
                let rewritten: Vec<Chat> = merged.iter().cloned().chain(others).collect();
                if let Err(e) = self.cache.replace_chats(rewritten).await {
                    tracing::warn!(error = %e, "Failed to write merged chat list to cache");
                }
                merged
            }
            None => {
                let mut local: Vec<Chat> = dedup_chats(
                    cached.into_iter().filter(|c| c.user_id == user_id).collect(),
                );
                sort_newest_first(&mut local);
                local
            }
        };

        Ok(paginate(merged, limit, skip))
    }

    async fn update_chat(&self, chat_id: &str, update: ChatUpdate) -> Result<Chat> {
        let cached = self.cache.chat(chat_id).await.map(|mut chat| {
            chat.apply(update.clone());
            chat
        });

        let remote = if is_backend_chat_id(chat_id) {
            match self.remote.update_chat(chat_id, update).await {
                Ok(chat) => Some(chat),
                Err(e) => {
                    tracing::warn!(chat_id = %chat_id, error = %e, "Backend chat update failed");
                    None
                }
            }
        } else {
            None
        };

        match remote.or(cached) {
            Some(chat) => {
                self.mirror_chat(&chat).await;
                Ok(chat)
            }
            None => Err(PersistError::ChatNotFound(chat_id.to_string())),
        }
    }

    async fn delete_chat(&self, chat_id: &str, user_id: &str) -> Result<()> {
        let remote_ok = if is_backend_chat_id(chat_id) {
            match self.remote.delete_chat(chat_id, user_id).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(chat_id = %chat_id, error = %e, "Backend chat delete failed");
                    false
                }
            }
        } else {
            false
        };

        let local_ok = match self.cache.remove_chat(chat_id).await {
            Ok(removed) => removed,
            Err(e) => {
                tracing::warn!(chat_id = %chat_id, error = %e, "Local chat delete failed");
                false
            }
        };

        if remote_ok || local_ok {
            Ok(())
        } else {
            Err(PersistError::ChatNotFound(chat_id.to_string()))
        }
    }

    async fn append_message(&self, chat_id: &str, from_user: bool, content: &str) -> Result<Message> {
        let message = if is_backend_chat_id(chat_id) {
            match self.remote.append_message(chat_id, from_user, content).await {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!(chat_id = %chat_id, error = %e, "Backend message save failed, keeping local copy");
                    Message::new(chat_id, from_user, content)
                }
            }
        } else {
            Message::new(chat_id, from_user, content)
        };

        self.cache.push_message(message.clone()).await?;
        Ok(message)
    }

    async fn list_messages(&self, chat_id: &str) -> Result<Vec<Message>> {
        if !is_backend_chat_id(chat_id) {
            return Ok(self.cache.messages(chat_id).await);
        }

        match self.remote.list_messages(chat_id).await {
            Ok(messages) => {
                if let Err(e) = self.cache.save_messages(chat_id, messages.clone()).await {
                    tracing::warn!(chat_id = %chat_id, error = %e, "Failed to cache messages");
                }
                Ok(messages)
            }
            Err(e) => {
                tracing::warn!(chat_id = %chat_id, error = %e, "Backend message list failed, using cache");
                Ok(self.cache.messages(chat_id).await)
            }
        }
    }
}
