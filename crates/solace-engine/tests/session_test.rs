mod common;

use async_trait::async_trait;
use common::{RecordingNotifier, StubGenerator};
use solace_engine::{ChatSession, ReplySource, Responder, SeededRandom};
use solace_persist::error::Result as PersistResult;
use solace_persist::{
    Chat, ChatUpdate, MemoryPersistenceClient, Message, NewChat, PersistError, PersistenceClient,
};
use solace_types::{Concern, EmotionalState, MoodTrend, RiskLevel, MAX_TRACKED};
use std::sync::Arc;

fn offline_responder() -> Arc<Responder> {
    Arc::new(
        Responder::builder()
            .notifier(Arc::new(RecordingNotifier::default()))
            .random(Arc::new(SeededRandom::new(9)))
            .build(),
    )
}

/// Backend where every call fails
struct UnavailableBackend;

#[async_trait]
impl PersistenceClient for UnavailableBackend {
    async fn create_chat(&self, _user_id: &str, _chat: NewChat) -> PersistResult<Chat> {
        Err(PersistError::Connection("down".into()))
    }

    async fn get_chat(&self, _chat_id: &str) -> PersistResult<Option<Chat>> {
        Err(PersistError::Connection("down".into()))
    }

    async fn list_chats(
        &self,
        _user_id: &str,
        _limit: Option<i64>,
        _skip: Option<i64>,
    ) -> PersistResult<Vec<Chat>> {
        Err(PersistError::Connection("down".into()))
    }

    async fn update_chat(&self, _chat_id: &str, _update: ChatUpdate) -> PersistResult<Chat> {
        Err(PersistError::Connection("down".into()))
    }

    async fn delete_chat(&self, _chat_id: &str, _user_id: &str) -> PersistResult<()> {
        Err(PersistError::Connection("down".into()))
    }

    async fn append_message(
        &self,
        _chat_id: &str,
        _from_user: bool,
        _content: &str,
    ) -> PersistResult<Message> {
        Err(PersistError::Connection("down".into()))
    }

    async fn list_messages(&self, _chat_id: &str) -> PersistResult<Vec<Message>> {
        Err(PersistError::Connection("down".into()))
    }
}

#[tokio::test]
async fn test_blank_input_is_a_no_op() {
    let persist = Arc::new(MemoryPersistenceClient::new());
    let mut session = ChatSession::new("user-1", persist.clone(), offline_responder());

    assert!(session.submit("   \n\t").await.is_none());
    assert!(session.chat_id().is_none());
    assert!(session.history().is_empty());
    assert!(persist.list_chats("user-1", None, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_first_turn_creates_chat_and_persists_both_messages() {
    let persist = Arc::new(MemoryPersistenceClient::new());
    let mut session = ChatSession::new("user-1", persist.clone(), offline_responder());

    let message = "I have been feeling off for a few days..";
    let outcome = session.submit(message).await.unwrap();
    let chat_id = outcome.chat_id.clone().unwrap();

    let chat = persist.get_chat(&chat_id).await.unwrap().unwrap();
    assert_eq!(chat.user_id, "user-1");
    assert_eq!(chat.title, "I have been feeling off for a ...");
    assert_eq!(chat.preview, message);
    assert_eq!(chat.chat_type, "mental_health");

    let messages = persist.list_messages(&chat_id).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].from_user);
    assert_eq!(messages[0].content, message);
    assert!(!messages[1].from_user);
    assert_eq!(messages[1].content, outcome.reply.text);
}

#[tokio::test]
async fn test_later_turns_refresh_preview() {
    let persist = Arc::new(MemoryPersistenceClient::new());
    let mut session = ChatSession::new("user-1", persist.clone(), offline_responder());

    session.submit("hello there").await.unwrap();
    let outcome = session.submit("work has been a lot lately").await.unwrap();

    let chat = persist
        .get_chat(outcome.chat_id.as_deref().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(chat.title, "hello there");
    assert_eq!(chat.preview, "work has been a lot lately");
    assert_eq!(session.history().len(), 4);
}

#[tokio::test]
async fn test_anxious_sleepless_turn_summary() {
    let persist = Arc::new(MemoryPersistenceClient::new());
    let mut session = ChatSession::new("user-1", persist, offline_responder());

    let outcome = session.submit("I'm feeling anxious and can't sleep").await.unwrap();
    let summary = outcome.summary;

    assert!(summary.has_concern(Concern::Anxiety));
    assert!(summary.has_concern(Concern::Sleep));
    assert_eq!(summary.emotional_state, EmotionalState::Anxiety);
    assert_eq!(summary.risk_level, RiskLevel::Low);
}

#[tokio::test]
async fn test_crisis_turn_surfaces_resources() {
    let persist = Arc::new(MemoryPersistenceClient::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let responder = Arc::new(
        Responder::builder()
            .generator(Arc::new(StubGenerator::replying(
                "I'm so sorry you're hurting this much. You are not alone in this.",
            )))
            .notifier(notifier.clone())
            .build(),
    );
    let mut session = ChatSession::new("user-1", persist, responder);

    let outcome = session.submit("I want to kill myself").await.unwrap();

    assert_eq!(outcome.summary.risk_level, RiskLevel::Crisis);
    assert_eq!(outcome.reply.source, ReplySource::Remote);
    assert!(outcome.reply.crisis_alert.is_some());
    assert_eq!(notifier.count(), 1);
}

#[tokio::test]
async fn test_trend_declines_from_calm_to_distressed() {
    let persist = Arc::new(MemoryPersistenceClient::new());
    let mut session = ChatSession::new("user-1", persist, offline_responder());

    session.submit("hi").await.unwrap();
    let outcome = session.submit("I'm anxious and lonely and angry").await.unwrap();
    assert_eq!(outcome.summary.mood_trend, MoodTrend::Declining);
}

#[tokio::test]
async fn test_concerns_stay_bounded() {
    let persist = Arc::new(MemoryPersistenceClient::new());
    let mut session = ChatSession::new("user-1", persist, offline_responder());

    for message in [
        "anxious about my exam",
        "my boss and my family",
        "so angry and sad",
        "lonely and stressed",
        "I can't sleep",
    ] {
        let outcome = session.submit(message).await.unwrap();
        assert!(outcome.summary.primary_concerns.len() <= MAX_TRACKED);
        assert!(outcome.summary.coping_strategies_used.len() <= MAX_TRACKED);
    }
}

#[tokio::test]
async fn test_storage_outage_keeps_conversation_in_memory() {
    let mut session = ChatSession::new("user-1", Arc::new(UnavailableBackend), offline_responder());

    let first = session.submit("feeling down today").await.unwrap();
    assert!(first.chat_id.is_none());
    assert!(!first.reply.text.is_empty());

    let second = session.submit("still down").await.unwrap();
    assert!(second.chat_id.is_none());
    assert_eq!(session.history().len(), 4);
}

#[tokio::test]
async fn test_resume_replays_history_into_summary() {
    let persist = Arc::new(MemoryPersistenceClient::new());
    let chat = persist.create_chat("user-1", NewChat::default()).await.unwrap();
    persist.append_message(&chat.id, true, "I'm so anxious").await.unwrap();
    persist
        .append_message(&chat.id, false, "Let's try box breathing together.")
        .await
        .unwrap();
    persist.append_message(&chat.id, true, "I can't sleep either").await.unwrap();

    let session = ChatSession::resume(&chat.id, "user-1", persist, offline_responder())
        .await
        .unwrap();

    assert_eq!(session.chat_id(), Some(chat.id.as_str()));
    assert_eq!(session.history().len(), 3);
    let summary = session.summary();
    assert_eq!(summary.primary_concerns, vec![Concern::Anxiety, Concern::Sleep]);
    assert_eq!(summary.coping_strategies_used.len(), 1);
    assert_eq!(
        summary.last_updated.as_ref().map(|s| s.message.as_str()),
        Some("I can't sleep either")
    );
}

#[tokio::test]
async fn test_resumed_session_appends_to_existing_chat() {
    let persist = Arc::new(MemoryPersistenceClient::new());
    let chat = persist.create_chat("user-1", NewChat::default()).await.unwrap();

    let mut session = ChatSession::resume(&chat.id, "user-1", persist.clone(), offline_responder())
        .await
        .unwrap();
    let outcome = session.submit("first real message").await.unwrap();

    assert_eq!(outcome.chat_id.as_deref(), Some(chat.id.as_str()));
    assert_eq!(persist.list_chats("user-1", None, None).await.unwrap().len(), 1);

    let updated = persist.get_chat(&chat.id).await.unwrap().unwrap();
    assert_eq!(updated.title, "first real message");
    assert_eq!(updated.preview, "first real message");
}
