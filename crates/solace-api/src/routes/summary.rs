use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use solace_types::{ConversationSummary, EmotionalScore};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    pub user_id: String,
}

/// Conversation insights for a chat
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub chat_id: String,
    /// Display label of the dominant emotion, e.g. "Anxiety"
    pub emotional_state: String,
    pub risk_level: String,
    pub mood_trend: String,
    pub primary_concerns: Vec<String>,
    pub coping_strategies_used: Vec<String>,
    pub key_insights: Vec<String>,
    #[schema(value_type = Object, nullable)]
    pub last_scores: Option<EmotionalScore>,
    pub turns: usize,
}

impl SummaryResponse {
    fn new(chat_id: String, summary: &ConversationSummary, turns: usize) -> Self {
        Self {
            chat_id,
            emotional_state: summary.emotional_state.label().to_string(),
            risk_level: summary.risk_level.to_string(),
            mood_trend: summary.mood_trend.to_string(),
            primary_concerns: summary.primary_concerns.iter().map(ToString::to_string).collect(),
            coping_strategies_used: summary
                .coping_strategies_used
                .iter()
                .map(ToString::to_string)
                .collect(),
            key_insights: summary.key_insights.clone(),
            last_scores: summary.last_updated.as_ref().map(|sample| sample.emotional_score),
            turns,
        }
    }
}

/// Current conversation summary, rebuilt from stored messages if the
/// session is not live
#[utoipa::path(
    get,
    path = "/chats/{chat_id}/summary",
    params(
        ("chat_id" = String, Path, description = "Chat ID"),
        SummaryQuery
    ),
    responses(
        (status = 200, description = "Conversation insights", body = SummaryResponse),
        (status = 404, description = "Chat not found")
    ),
    tag = "chats"
)]
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Json<SummaryResponse>> {
    let chat = state
        .persist
        .get_chat(&chat_id)
        .await?
        .filter(|chat| chat.user_id == query.user_id)
        .ok_or_else(|| ApiError::ChatNotFound(chat_id.clone()))?;

    let session = state.session(&chat.id, &query.user_id).await?;
    let session = session.lock().await;
    let turns = session.history().iter().filter(|entry| entry.from_user).count();

    Ok(Json(SummaryResponse::new(chat.id, session.summary(), turns)))
}
