use solace_engine::{ChatSession, Responder};
use solace_persist::{PersistError, PersistenceClient};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::config::Config;

pub type SharedSession = Arc<Mutex<ChatSession>>;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub persist: Arc<dyn PersistenceClient>,
    pub responder: Arc<Responder>,
    pub sessions: Arc<SessionRegistry>,
    /// Provider name of the remote generator, if one is configured
    pub generator: Option<String>,
}

impl AppState {
    pub fn new(
        config: Config,
        persist: Arc<dyn PersistenceClient>,
        responder: Arc<Responder>,
        generator: Option<String>,
    ) -> Self {
        let idle_ttl = Duration::from_secs(config.server.session_idle_secs);
        Self {
            config: Arc::new(config),
            persist,
            responder,
            sessions: Arc::new(SessionRegistry::new(idle_ttl)),
            generator,
        }
    }

    pub fn new_session(&self, user_id: &str) -> ChatSession {
        ChatSession::new(user_id, self.persist.clone(), self.responder.clone())
    }

    /// Live session for a chat, resumed from storage on first access
    pub async fn session(&self, chat_id: &str, user_id: &str) -> Result<SharedSession, PersistError> {
        if let Some(session) = self.sessions.get(chat_id).await {
            return Ok(session);
        }

        let session = ChatSession::resume(
            chat_id,
            user_id,
            self.persist.clone(),
            self.responder.clone(),
        )
        .await?;
        Ok(self.sessions.insert_if_absent(chat_id, session).await)
    }
}

struct Entry {
    session: SharedSession,
    last_access: Instant,
}

impl Entry {
    fn new(session: SharedSession) -> Self {
        Self {
            session,
            last_access: Instant::now(),
        }
    }
}

/// In-memory sessions keyed by chat id, or by a minted session id while
/// the chat has no stored record. Summaries live only here, so an idle
/// entry is dropped and later rebuilt from its stored messages.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, Entry>>,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    pub async fn get(&self, key: &str) -> Option<SharedSession> {
        let mut sessions = self.sessions.lock().await;
        let expired = sessions
            .get(key)
            .is_some_and(|entry| entry.last_access.elapsed() > self.idle_ttl);
        if expired {
            sessions.remove(key);
            tracing::debug!(key, "Dropped idle session");
            return None;
        }

        sessions.get_mut(key).map(|entry| {
            entry.last_access = Instant::now();
            entry.session.clone()
        })
    }

    /// Register a session; an already registered one wins
    pub async fn insert_if_absent(&self, key: &str, session: ChatSession) -> SharedSession {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions
            .entry(key.to_string())
            .or_insert_with(|| Entry::new(Arc::new(Mutex::new(session))));
        entry.last_access = Instant::now();
        entry.session.clone()
    }

    pub async fn insert(&self, key: &str, session: SharedSession) {
        self.sessions
            .lock()
            .await
            .insert(key.to_string(), Entry::new(session));
    }

    pub async fn remove(&self, key: &str) -> bool {
        self.sessions.lock().await.remove(key).is_some()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.sessions.lock().await.contains_key(key)
    }

    /// Drop every session idle for longer than the TTL; returns how many went
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_access.elapsed() <= self.idle_ttl);
        before - sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_persist::MemoryPersistenceClient;

    fn session() -> ChatSession {
        ChatSession::new(
            "user-1",
            Arc::new(MemoryPersistenceClient::new()),
            Arc::new(Responder::builder().build()),
        )
    }

    #[tokio::test]
    async fn test_idle_session_is_dropped_on_access() {
        let registry = SessionRegistry::new(Duration::from_millis(20));
        registry.insert_if_absent("chat-1", session()).await;
        assert!(registry.get("chat-1").await.is_some());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(registry.get("chat-1").await.is_none());
        assert!(!registry.contains("chat-1").await);
    }

    #[tokio::test]
    async fn test_evict_idle_keeps_recent_sessions() {
        let registry = SessionRegistry::new(Duration::from_millis(40));
        registry.insert_if_absent("old", session()).await;
        tokio::time::sleep(Duration::from_millis(80)).await;
        registry.insert_if_absent("fresh", session()).await;

        assert_eq!(registry.evict_idle().await, 1);
        assert!(registry.contains("fresh").await);
        assert!(!registry.contains("old").await);
    }

    #[tokio::test]
    async fn test_access_refreshes_idle_clock() {
        let registry = SessionRegistry::new(Duration::from_millis(250));
        registry.insert_if_absent("chat-1", session()).await;
        for _ in 0..3 {
            tokio::time::sleep(Duration::from_millis(50)).await;
            assert!(registry.get("chat-1").await.is_some());
        }
        assert_eq!(registry.evict_idle().await, 0);
    }
}
