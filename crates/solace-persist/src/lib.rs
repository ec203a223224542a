pub mod cache;
pub mod dbs;
pub mod error;
pub mod models;
pub mod text;
pub mod trait_client;

pub use cache::{CachedPersistenceClient, LocalCache};
pub use dbs::memory::MemoryPersistenceClient;
#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoPersistenceClient;
pub use error::PersistError;
pub use models::{Chat, ChatUpdate, Message, NewChat};
pub use trait_client::PersistenceClient;
