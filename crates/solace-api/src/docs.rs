use axum::Json;
use utoipa::OpenApi;

use crate::routes::{chats, health, messages, resources, summary, turns};

#[derive(OpenApi)]
#[openapi(
    info(title = "Solace API", description = "Supportive chat turns, chat history and crisis resources"),
    paths(
        health::health_check,
        chats::create_chat,
        chats::list_chats,
        chats::get_chat,
        chats::update_chat,
        chats::delete_chat,
        messages::list_messages,
        turns::submit_turn,
        summary::get_summary,
        resources::crisis_resources,
        resources::coping_techniques,
        resources::library,
        resources::library_categories,
    ),
    components(schemas(
        health::HealthResponse,
        chats::CreateChatRequest,
        chats::UpdateChatRequest,
        chats::ChatResponse,
        chats::ListChatsResponse,
        messages::MessageResponse,
        messages::ListMessagesResponse,
        turns::TurnRequest,
        turns::TurnResponse,
        summary::SummaryResponse,
        resources::CrisisResourceResponse,
        resources::CopingTechniqueResponse,
        resources::ArticleResponse,
        resources::LibraryResponse,
        resources::CategoryCountResponse,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "chats", description = "Chat management and insights"),
        (name = "messages", description = "Chat transcripts"),
        (name = "turns", description = "Conversation turns"),
        (name = "resources", description = "Crisis hotlines, coping techniques and the reading library"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document for the whole API
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
