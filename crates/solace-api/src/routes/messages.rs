use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solace_persist::Message;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message_id: String,
    pub chat_id: String,
    pub from_user: bool,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            message_id: message.id,
            chat_id: message.chat_id,
            from_user: message.from_user,
            content: message.content,
            timestamp: message.timestamp,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListMessagesResponse {
    pub messages: Vec<MessageResponse>,
}

/// List messages of a chat in chronological order
#[utoipa::path(
    get,
    path = "/chats/{chat_id}/messages",
    params(
        ("chat_id" = String, Path, description = "Chat ID")
    ),
    responses(
        (status = 200, description = "Messages in the chat", body = ListMessagesResponse),
        (status = 404, description = "Chat not found")
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
) -> ApiResult<Json<ListMessagesResponse>> {
    if state.persist.get_chat(&chat_id).await?.is_none() {
        return Err(ApiError::ChatNotFound(chat_id));
    }

    let messages = state.persist.list_messages(&chat_id).await?;
    Ok(Json(ListMessagesResponse {
        messages: messages.into_iter().map(MessageResponse::from).collect(),
    }))
}
