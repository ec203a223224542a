use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson::doc, bson::oid::ObjectId, Client, Collection};

use crate::dbs::mongo::models::MongoMessage;
use crate::error::Result;

#[derive(Clone)]
pub struct MongoMessageRepository {
    collection: Collection<MongoMessage>,
}

impl MongoMessageRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("messages");
        Self { collection }
    }

    /// Insert one message
    pub async fn append_message(
        &self,
        chat_id: ObjectId,
        from_user: bool,
        content: &str,
    ) -> Result<MongoMessage> {
        let message = MongoMessage {
            id: ObjectId::new(),
            chat_id,
            from_user,
            message_content: content.to_string(),
            timestamp: Utc::now(),
        };
        self.collection.insert_one(&message).await?;
        Ok(message)
    }

    /// Get all messages for a chat
    pub async fn get_messages(&self, chat_id: ObjectId) -> Result<Vec<MongoMessage>> {
        let filter = doc! { "chat_id": chat_id };
        let messages = self
            .collection
            .find(filter)
            .sort(doc! { "timestamp": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }

    /// Remove every message of a chat
    pub async fn delete_for_chat(&self, chat_id: ObjectId) -> Result<u64> {
        let result = self
            .collection
            .delete_many(doc! { "chat_id": chat_id })
            .await?;
        Ok(result.deleted_count)
    }
}
