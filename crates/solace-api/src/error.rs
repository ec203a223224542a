use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use solace_persist::PersistError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ChatNotFound(_)
            | ApiError::SessionNotFound(_)
            | ApiError::Persist(PersistError::ChatNotFound(_)) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiError::BadRequest(_) | ApiError::Persist(PersistError::InvalidObjectId(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Persist(ref e) => {
                tracing::error!("Persistence error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::ChatNotFound("c1".into()), StatusCode::NOT_FOUND),
            (ApiError::SessionNotFound("session-1".into()), StatusCode::NOT_FOUND),
            (ApiError::Persist(PersistError::ChatNotFound("c1".into())), StatusCode::NOT_FOUND),
            (ApiError::BadRequest("empty".into()), StatusCode::BAD_REQUEST),
            (ApiError::Persist(PersistError::InvalidObjectId("zz".into())), StatusCode::BAD_REQUEST),
            (ApiError::Persist(PersistError::Connection("down".into())), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
