mod client;
mod store;

pub use client::{generate_local_chat_id, is_backend_chat_id, CachedPersistenceClient};
pub use store::LocalCache;
