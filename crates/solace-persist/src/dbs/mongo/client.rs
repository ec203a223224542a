use async_trait::async_trait;
use mongodb::{bson::oid::ObjectId, Client};

use crate::dbs::mongo::repositories::{MongoChatRepository, MongoMessageRepository};
use crate::error::{PersistError, Result};
use crate::models::{Chat, ChatUpdate, Message, NewChat};
use crate::trait_client::PersistenceClient;

pub struct MongoPersistenceClient {
    chat_repo: MongoChatRepository,
    message_repo: MongoMessageRepository,
}

impl MongoPersistenceClient {
    /// Connect to MongoDB and create client
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        Ok(Self {
            chat_repo: MongoChatRepository::new(&client, database),
            message_repo: MongoMessageRepository::new(&client, database),
        })
    }
}

fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| PersistError::InvalidObjectId(e.to_string()))
}

#[async_trait]
impl PersistenceClient for MongoPersistenceClient {
    async fn create_chat(&self, user_id: &str, chat: NewChat) -> Result<Chat> {
        let mongo_chat = self.chat_repo.create_chat(user_id.to_string(), chat).await?;
        Ok(mongo_chat.into())
    }

    async fn get_chat(&self, chat_id: &str) -> Result<Option<Chat>> {
        let object_id = parse_id(chat_id)?;
        let mongo_chat = self.chat_repo.get_chat(object_id).await?;
        Ok(mongo_chat.map(|c| c.into()))
    }

    async fn list_chats(
        &self,
        user_id: &str,
        limit: Option<i64>,
        skip: Option<i64>,
    ) -> Result<Vec<Chat>> {
        let mongo_chats = self.chat_repo.list_chats(user_id, limit, skip).await?;
        Ok(mongo_chats.into_iter().map(|c| c.into()).collect())
    }

    async fn update_chat(&self, chat_id: &str, update: ChatUpdate) -> Result<Chat> {
        let object_id = parse_id(chat_id)?;
        if !self.chat_repo.update_chat(object_id, update).await? {
            return Err(PersistError::ChatNotFound(chat_id.to_string()));
        }
        self.chat_repo
            .get_chat(object_id)
            .await?
            .map(|c| c.into())
            .ok_or_else(|| PersistError::ChatNotFound(chat_id.to_string()))
    }

    async fn delete_chat(&self, chat_id: &str, user_id: &str) -> Result<()> {
        let object_id = parse_id(chat_id)?;
        if !self.chat_repo.delete_chat(object_id, user_id).await? {
            return Err(PersistError::ChatNotFound(chat_id.to_string()));
        }
        let removed = self.message_repo.delete_for_chat(object_id).await?;
        tracing::debug!(chat_id = %chat_id, removed, "Deleted chat messages");
        Ok(())
    }

    async fn append_message(&self, chat_id: &str, from_user: bool, content: &str) -> Result<Message> {
        let object_id = parse_id(chat_id)?;
        let message = self
            .message_repo
            .append_message(object_id, from_user, content)
            .await?;
        self.chat_repo.touch_chat(object_id).await?;
        Ok(message.into())
    }

    async fn list_messages(&self, chat_id: &str) -> Result<Vec<Message>> {
        let object_id = parse_id(chat_id)?;
        let messages = self.message_repo.get_messages(object_id).await?;
        Ok(messages.into_iter().map(|m| m.into()).collect())
    }
}
