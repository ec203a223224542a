// One chat session: turn orchestration, persistence and history replay

use chrono::Utc;
use solace_persist::{ChatUpdate, Message, NewChat, PersistError, PersistenceClient};
use solace_types::{ConversationSummary, HistoryEntry};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::responder::{Reply, Responder};
use crate::summary::{reduce, TurnInput};

/// Result of a submitted user turn
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// `None` while the chat could not be created in storage
    pub chat_id: Option<String>,
    pub reply: Reply,
    pub summary: ConversationSummary,
}

pub struct ChatSession {
    user_id: String,
    chat_id: Option<String>,
    history: Vec<HistoryEntry>,
    summary: ConversationSummary,
    persist: Arc<dyn PersistenceClient>,
    responder: Arc<Responder>,
}

impl ChatSession {
    /// Fresh session; the chat is created on the first submitted turn
    pub fn new(
        user_id: impl Into<String>,
        persist: Arc<dyn PersistenceClient>,
        responder: Arc<Responder>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            chat_id: None,
            history: Vec::new(),
            summary: ConversationSummary::new(),
            persist,
            responder,
        }
    }

    /// Reopen an existing chat, rebuilding history and summary from storage
    pub async fn resume(
        chat_id: impl Into<String>,
        user_id: impl Into<String>,
        persist: Arc<dyn PersistenceClient>,
        responder: Arc<Responder>,
    ) -> Result<Self, PersistError> {
        let chat_id = chat_id.into();
        let messages = persist.list_messages(&chat_id).await?;

        let mut session = Self::new(user_id, persist, responder);
        session.chat_id = Some(chat_id.clone());
        session.replay(&messages);

        info!(chat_id = %chat_id, messages = messages.len(), "Resumed chat session");
        Ok(session)
    }

    /// Rebuild history and fold every user message, paired with the
    /// assistant reply right after it, into the summary.
    pub fn replay(&mut self, messages: &[Message]) {
        for (index, message) in messages.iter().enumerate() {
            self.history.push(HistoryEntry {
                from_user: message.from_user,
                text: message.content.clone(),
            });

            if !message.from_user {
                continue;
            }
            let reply = messages
                .get(index + 1)
                .filter(|next| !next.from_user)
                .map(|next| next.content.as_str());

            let mut turn = TurnInput::new(&message.content).at(message.timestamp);
            if let Some(reply) = reply {
                turn = turn.with_reply(reply);
            }
            self.summary = reduce(&self.summary, &turn);
        }
    }

    /// Run one user turn. Blank input is ignored and yields `None`.
    ///
    /// Storage failures are logged and never abort the turn.
    pub async fn submit(&mut self, text: &str) -> Option<TurnOutcome> {
        let user_message = text.trim();
        if user_message.is_empty() {
            debug!("Ignoring blank message");
            return None;
        }

        let created = self.ensure_chat(user_message).await;
        if let Some(chat_id) = &self.chat_id {
            if let Err(e) = self.persist.append_message(chat_id, true, user_message).await {
                warn!(chat_id = %chat_id, error = %e, "Failed to persist user message");
            }
        }

        let reply = self.responder.respond(user_message, &self.history).await;

        self.history.push(HistoryEntry::user(user_message));
        self.history.push(HistoryEntry::assistant(reply.text.clone()));

        let turn = TurnInput::new(user_message)
            .with_reply(&reply.text)
            .at(Utc::now());
        self.summary = reduce(&self.summary, &turn);

        if let Some(chat_id) = &self.chat_id {
            if let Err(e) = self.persist.append_message(chat_id, false, &reply.text).await {
                warn!(chat_id = %chat_id, error = %e, "Failed to persist assistant message");
            }
            if !created {
                self.refresh_chat(chat_id, user_message).await;
            }
        }

        Some(TurnOutcome {
            chat_id: self.chat_id.clone(),
            reply,
            summary: self.summary.clone(),
        })
    }

    /// Create the backing chat if needed; `true` when created by this call
    async fn ensure_chat(&mut self, first_message: &str) -> bool {
        if self.chat_id.is_some() {
            return false;
        }

        match self
            .persist
            .create_chat(&self.user_id, NewChat::from_first_message(first_message))
            .await
        {
            Ok(chat) => {
                info!(chat_id = %chat.id, user_id = %self.user_id, "Created chat");
                self.chat_id = Some(chat.id);
                true
            }
            Err(e) => {
                warn!(user_id = %self.user_id, error = %e, "Failed to create chat, continuing in memory");
                false
            }
        }
    }

    async fn refresh_chat(&self, chat_id: &str, user_message: &str) {
        let chat = match self.persist.get_chat(chat_id).await {
            Ok(Some(chat)) => chat,
            Ok(None) => {
                warn!(chat_id = %chat_id, "Chat disappeared before preview refresh");
                return;
            }
            Err(e) => {
                warn!(chat_id = %chat_id, error = %e, "Failed to load chat for preview refresh");
                return;
            }
        };

        let update = ChatUpdate::after_user_message(&chat, user_message);
        if let Err(e) = self.persist.update_chat(chat_id, update).await {
            warn!(chat_id = %chat_id, error = %e, "Failed to refresh chat preview");
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id.as_deref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn summary(&self) -> &ConversationSummary {
        &self.summary
    }
}
