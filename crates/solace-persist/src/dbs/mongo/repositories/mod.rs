pub mod chat;
pub mod message;

pub use chat::MongoChatRepository;
pub use message::MongoMessageRepository;
