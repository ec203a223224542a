pub mod chats;
pub mod health;
pub mod messages;
pub mod resources;
pub mod summary;
pub mod turns;
