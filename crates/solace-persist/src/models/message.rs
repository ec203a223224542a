use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Database-agnostic message model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub from_user: bool,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, from_user: bool, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            from_user,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
