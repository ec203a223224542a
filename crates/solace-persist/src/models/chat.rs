use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::text::{chat_preview, chat_title};

pub const DEFAULT_CHAT_TITLE: &str = "New Conversation";
pub const DEFAULT_CHAT_PREVIEW: &str = "Start a new conversation...";
pub const DEFAULT_CHAT_TYPE: &str = "mental_health";

/// Titles that get replaced by the first user message
const PLACEHOLDER_TITLES: [&str; 2] = [DEFAULT_CHAT_TITLE, "Welcome Chat"];

/// Database-agnostic chat model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub preview: String,
    #[serde(rename = "type")]
    pub chat_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, new_chat: NewChat) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: new_chat.title,
            preview: new_chat.preview,
            chat_type: new_chat.chat_type,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_placeholder_title(&self) -> bool {
        PLACEHOLDER_TITLES.contains(&self.title.as_str())
    }

    pub fn apply(&mut self, update: ChatUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(preview) = update.preview {
            self.preview = preview;
        }
        self.updated_at = Utc::now();
    }
}

/// Fields supplied when creating a chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChat {
    pub title: String,
    pub preview: String,
    #[serde(rename = "type", default = "default_chat_type")]
    pub chat_type: String,
}

fn default_chat_type() -> String {
    DEFAULT_CHAT_TYPE.to_string()
}

impl Default for NewChat {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHAT_TITLE.to_string(),
            preview: DEFAULT_CHAT_PREVIEW.to_string(),
            chat_type: default_chat_type(),
        }
    }
}

impl NewChat {
    /// Title and preview derived from the opening user message
    pub fn from_first_message(message: &str) -> Self {
        Self {
            title: chat_title(message),
            preview: chat_preview(message),
            chat_type: default_chat_type(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl ChatUpdate {
    /// Preview always follows the latest user message; the title only while
    /// it is still a placeholder.
    pub fn after_user_message(chat: &Chat, user_message: &str) -> Self {
        Self {
            title: chat
                .has_placeholder_title()
                .then(|| chat_title(user_message)),
            preview: Some(chat_preview(user_message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chat_defaults() {
        let new_chat = NewChat::default();
        assert_eq!(new_chat.title, DEFAULT_CHAT_TITLE);
        assert_eq!(new_chat.preview, DEFAULT_CHAT_PREVIEW);
        assert_eq!(new_chat.chat_type, "mental_health");
    }

    #[test]
    fn test_from_first_message_truncates() {
        let message = "My exams are next week and I can't stop worrying about them";
        let new_chat = NewChat::from_first_message(message);
        assert_eq!(new_chat.title, "My exams are next week and I c...");
        assert!(new_chat.preview.ends_with("..."));
    }

    #[test]
    fn test_update_keeps_custom_title() {
        let chat = Chat::new(
            "c1",
            "u1",
            NewChat {
                title: "Exam stress".to_string(),
                ..NewChat::default()
            },
        );
        let update = ChatUpdate::after_user_message(&chat, "still stressed");
        assert_eq!(update.title, None);
        assert_eq!(update.preview.as_deref(), Some("still stressed"));
    }

    #[test]
    fn test_update_replaces_placeholder_title() {
        let mut chat = Chat::new("c1", "u1", NewChat::default());
        let update = ChatUpdate::after_user_message(&chat, "hello there");
        chat.apply(update);
        assert_eq!(chat.title, "hello there");
        assert_eq!(chat.preview, "hello there");
    }

    #[test]
    fn test_chat_type_serialized_as_type() {
        let chat = Chat::new("c1", "u1", NewChat::default());
        let json = serde_json::to_value(&chat).unwrap();
        assert_eq!(json["type"], "mental_health");
    }
}
