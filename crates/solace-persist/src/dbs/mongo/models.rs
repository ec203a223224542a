use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{Chat, Message};

/// MongoDB-specific Chat model (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoChat {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: String,
    pub title: String,
    pub preview: String,
    #[serde(rename = "type")]
    pub chat_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// MongoDB-specific Message model (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoMessage {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub chat_id: ObjectId,
    pub from_user: bool,
    pub message_content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<MongoChat> for Chat {
    fn from(chat: MongoChat) -> Self {
        Self {
            id: chat.id.to_hex(),
            user_id: chat.user_id,
            title: chat.title,
            preview: chat.preview,
            chat_type: chat.chat_type,
            created_at: chat.created_at,
            updated_at: chat.updated_at,
        }
    }
}

impl From<MongoMessage> for Message {
    fn from(msg: MongoMessage) -> Self {
        Self {
            id: msg.id.to_hex(),
            chat_id: msg.chat_id.to_hex(),
            from_user: msg.from_user,
            content: msg.message_content,
            timestamp: msg.timestamp,
        }
    }
}
