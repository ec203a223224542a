use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use solace_engine::{CrisisAlert, FallbackCategory, ReplySource};
use solace_types::ConversationSummary;
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TurnRequest {
    pub user_id: String,
    /// Existing chat to continue; a new chat is created when absent
    #[serde(default)]
    pub chat_id: Option<String>,
    /// Live session to continue when the chat has no stored record
    #[serde(default)]
    pub session_id: Option<String>,
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TurnResponse {
    /// `null` when the chat could not be stored; the reply is still valid
    pub chat_id: Option<String>,
    /// Key of the live session; equals `chat_id` once the chat is stored
    pub session_id: String,
    pub reply: String,
    #[schema(value_type = String, example = "remote")]
    pub source: ReplySource,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, nullable, example = "anxiety")]
    pub category: Option<FallbackCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object, nullable)]
    pub crisis_alert: Option<CrisisAlert>,
    #[schema(value_type = Object)]
    pub summary: ConversationSummary,
}

/// Submit one user message and receive the assistant reply
///
/// Turns on the same chat are processed one at a time.
#[utoipa::path(
    post,
    path = "/turns",
    request_body = TurnRequest,
    responses(
        (status = 200, description = "Assistant reply and updated conversation summary", body = TurnResponse),
        (status = 400, description = "Empty message"),
        (status = 404, description = "Chat or session not found")
    ),
    tag = "turns"
)]
pub async fn submit_turn(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TurnRequest>,
) -> ApiResult<Json<TurnResponse>> {
    if req.content.trim().is_empty() {
        return Err(ApiError::BadRequest("content must not be empty".to_string()));
    }

    let (key, session) = match (&req.chat_id, &req.session_id) {
        (Some(chat_id), _) => {
            let chat = state
                .persist
                .get_chat(chat_id)
                .await?
                .filter(|chat| chat.user_id == req.user_id)
                .ok_or_else(|| ApiError::ChatNotFound(chat_id.clone()))?;
            let session = state.session(&chat.id, &req.user_id).await?;
            (Some(chat.id), session)
        }
        (None, Some(session_id)) => {
            let session = state
                .sessions
                .get(session_id)
                .await
                .ok_or_else(|| ApiError::SessionNotFound(session_id.clone()))?;
            if session.lock().await.user_id() != req.user_id {
                return Err(ApiError::SessionNotFound(session_id.clone()));
            }
            (Some(session_id.clone()), session)
        }
        (None, None) => (None, Arc::new(Mutex::new(state.new_session(&req.user_id)))),
    };

    let outcome = {
        let mut session = session.lock().await;
        session.submit(&req.content).await
    }
    .ok_or_else(|| ApiError::BadRequest("content must not be empty".to_string()))?;

    // Keep the live session reachable even when storage failed, so the next
    // turn continues its summary instead of starting over
    let session_id = outcome
        .chat_id
        .clone()
        .or_else(|| key.clone())
        .unwrap_or_else(|| format!("session-{}", Uuid::new_v4().simple()));
    if key.as_deref() != Some(session_id.as_str()) {
        state.sessions.insert(&session_id, session.clone()).await;
        if let Some(stale) = &key {
            state.sessions.remove(stale).await;
        }
    }

    tracing::info!(
        chat_id = outcome.chat_id.as_deref().unwrap_or("-"),
        session_id = %session_id,
        source = ?outcome.reply.source,
        risk = %outcome.summary.risk_level,
        crisis = outcome.reply.crisis_alert.is_some(),
        "Turn completed"
    );

    Ok(Json(TurnResponse {
        chat_id: outcome.chat_id,
        session_id,
        reply: outcome.reply.text,
        source: outcome.reply.source,
        category: outcome.reply.category,
        crisis_alert: outcome.reply.crisis_alert,
        summary: outcome.summary,
    }))
}
