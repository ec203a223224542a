use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::{Chat, Message};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    chats: Vec<Chat>,
    #[serde(default)]
    messages: HashMap<String, Vec<Message>>,
}

/// JSON file mirroring chats and per-chat messages
///
/// A missing or unreadable file reads as empty. Writes replace the whole
/// file and are serialised through an internal lock.
pub struct LocalCache {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LocalCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Snapshot {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Snapshot::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read local cache");
                return Snapshot::default();
            }
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Discarding corrupt local cache");
            Snapshot::default()
        })
    }

    async fn store(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    async fn modify<T>(&self, f: impl FnOnce(&mut Snapshot) -> T) -> Result<T> {
        let _guard = self.lock.lock().await;
        let mut snapshot = self.load().await;
        let out = f(&mut snapshot);
        self.store(&snapshot).await?;
        Ok(out)
    }

    pub async fn chats(&self) -> Vec<Chat> {
        let _guard = self.lock.lock().await;
        self.load().await.chats
    }

    pub async fn chat(&self, chat_id: &str) -> Option<Chat> {
        self.chats().await.into_iter().find(|c| c.id == chat_id)
    }

    /// Insert or replace by id; the saved chat moves to the end
    pub async fn save_chat(&self, chat: Chat) -> Result<()> {
        self.modify(|s| {
            s.chats.retain(|c| c.id != chat.id);
            s.chats.push(chat);
        })
        .await
    }

    pub async fn replace_chats(&self, chats: Vec<Chat>) -> Result<()> {
        self.modify(|s| s.chats = chats).await
    }

    /// Remove a chat and its messages; `true` if the chat was cached
    pub async fn remove_chat(&self, chat_id: &str) -> Result<bool> {
        self.modify(|s| {
            let before = s.chats.len();
            s.chats.retain(|c| c.id != chat_id);
            s.messages.remove(chat_id);
            s.chats.len() != before
        })
        .await
    }

    pub async fn messages(&self, chat_id: &str) -> Vec<Message> {
        let _guard = self.lock.lock().await;
        self.load()
            .await
            .messages
            .remove(chat_id)
            .unwrap_or_default()
    }

    pub async fn save_messages(&self, chat_id: &str, messages: Vec<Message>) -> Result<()> {
        self.modify(|s| {
            s.messages.insert(chat_id.to_string(), messages);
        })
        .await
    }

    pub async fn push_message(&self, message: Message) -> Result<()> {
        self.modify(|s| {
            if let Some(chat) = s.chats.iter_mut().find(|c| c.id == message.chat_id) {
                chat.updated_at = message.timestamp;
            }
            s.messages
                .entry(message.chat_id.clone())
                .or_default()
                .push(message);
        })
        .await
    }
}
