mod chat;
mod message;

pub use chat::{Chat, ChatUpdate, NewChat, DEFAULT_CHAT_PREVIEW, DEFAULT_CHAT_TITLE, DEFAULT_CHAT_TYPE};
pub use message::Message;
