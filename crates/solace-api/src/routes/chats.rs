use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solace_persist::{Chat, ChatUpdate, NewChat};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateChatRequest {
    pub user_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default, rename = "type")]
    pub chat_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateChatRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub chat_id: String,
    pub user_id: String,
    pub title: String,
    pub preview: String,
    #[serde(rename = "type")]
    pub chat_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            chat_id: chat.id,
            user_id: chat.user_id,
            title: chat.title,
            preview: chat.preview,
            chat_type: chat.chat_type,
            created_at: chat.created_at,
            updated_at: chat.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListChatsQuery {
    pub user_id: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub skip: i64,
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListChatsResponse {
    pub chats: Vec<ChatResponse>,
    pub has_more: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OwnerQuery {
    pub user_id: String,
}

/// Create a new chat
#[utoipa::path(
    post,
    path = "/chats",
    request_body = CreateChatRequest,
    responses(
        (status = 201, description = "Chat created", body = ChatResponse),
        (status = 400, description = "Invalid request")
    ),
    tag = "chats"
)]
pub async fn create_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateChatRequest>,
) -> ApiResult<(StatusCode, Json<ChatResponse>)> {
    if req.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("user_id is required".to_string()));
    }

    let defaults = NewChat::default();
    let new_chat = NewChat {
        title: req.title.unwrap_or(defaults.title),
        preview: req.preview.unwrap_or(defaults.preview),
        chat_type: req.chat_type.unwrap_or(defaults.chat_type),
    };

    let chat = state.persist.create_chat(&req.user_id, new_chat).await?;
    Ok((StatusCode::CREATED, Json(chat.into())))
}

/// List chats for a user, most recently updated first
#[utoipa::path(
    get,
    path = "/chats",
    params(ListChatsQuery),
    responses(
        (status = 200, description = "List of chats", body = ListChatsResponse),
        (status = 400, description = "Invalid request")
    ),
    tag = "chats"
)]
pub async fn list_chats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListChatsQuery>,
) -> ApiResult<Json<ListChatsResponse>> {
    let limit = query.limit.clamp(1, 100);
    let skip = query.skip.max(0);

    let chats = state
        .persist
        .list_chats(&query.user_id, Some(limit), Some(skip))
        .await?;

    let has_more = chats.len() as i64 == limit;
    Ok(Json(ListChatsResponse {
        chats: chats.into_iter().map(ChatResponse::from).collect(),
        has_more,
    }))
}

/// Get a specific chat by ID
#[utoipa::path(
    get,
    path = "/chats/{chat_id}",
    params(
        ("chat_id" = String, Path, description = "Chat ID")
    ),
    responses(
        (status = 200, description = "Chat details", body = ChatResponse),
        (status = 404, description = "Chat not found")
    ),
    tag = "chats"
)]
pub async fn get_chat(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
) -> ApiResult<Json<ChatResponse>> {
    let chat = state
        .persist
        .get_chat(&chat_id)
        .await?
        .ok_or(ApiError::ChatNotFound(chat_id))?;

    Ok(Json(chat.into()))
}

/// Update title and/or preview
#[utoipa::path(
    patch,
    path = "/chats/{chat_id}",
    params(
        ("chat_id" = String, Path, description = "Chat ID")
    ),
    request_body = UpdateChatRequest,
    responses(
        (status = 200, description = "Chat updated", body = ChatResponse),
        (status = 400, description = "Nothing to update"),
        (status = 404, description = "Chat not found")
    ),
    tag = "chats"
)]
pub async fn update_chat(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
    Json(req): Json<UpdateChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    if req.title.is_none() && req.preview.is_none() {
        return Err(ApiError::BadRequest("title or preview is required".to_string()));
    }

    let update = ChatUpdate {
        title: req.title,
        preview: req.preview,
    };
    let chat = state.persist.update_chat(&chat_id, update).await?;
    Ok(Json(chat.into()))
}

/// Delete a chat and its messages
#[utoipa::path(
    delete,
    path = "/chats/{chat_id}",
    params(
        ("chat_id" = String, Path, description = "Chat ID"),
        OwnerQuery
    ),
    responses(
        (status = 204, description = "Chat deleted"),
        (status = 404, description = "Chat not found")
    ),
    tag = "chats"
)]
pub async fn delete_chat(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
    Query(owner): Query<OwnerQuery>,
) -> ApiResult<StatusCode> {
    state.persist.delete_chat(&chat_id, &owner.user_id).await?;
    state.sessions.remove(&chat_id).await;

    Ok(StatusCode::NO_CONTENT)
}
