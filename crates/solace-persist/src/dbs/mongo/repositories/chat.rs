use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson, bson::doc, bson::oid::ObjectId, Client, Collection};

use crate::dbs::mongo::models::MongoChat;
use crate::error::Result;
use crate::models::{ChatUpdate, NewChat};

#[derive(Clone)]
pub struct MongoChatRepository {
    collection: Collection<MongoChat>,
}

impl MongoChatRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("chats");
        Self { collection }
    }

    /// Create a new chat
    pub async fn create_chat(&self, user_id: String, new_chat: NewChat) -> Result<MongoChat> {
        let now = Utc::now();
        let chat = MongoChat {
            id: ObjectId::new(),
            user_id,
            title: new_chat.title,
            preview: new_chat.preview,
            chat_type: new_chat.chat_type,
            created_at: now,
            updated_at: now,
        };

        self.collection.insert_one(&chat).await?;
        Ok(chat)
    }

    /// Get chat by ID
    pub async fn get_chat(&self, chat_id: ObjectId) -> Result<Option<MongoChat>> {
        let filter = doc! { "_id": chat_id };
        Ok(self.collection.find_one(filter).await?)
    }

    /// List chats for a user
    pub async fn list_chats(
        &self,
        user_id: &str,
        limit: Option<i64>,
        skip: Option<i64>,
    ) -> Result<Vec<MongoChat>> {
        let filter = doc! { "user_id": user_id };
        let mut find_opts = self
            .collection
            .find(filter)
            .sort(doc! { "updated_at": -1 });

        if let Some(limit) = limit {
            find_opts = find_opts.limit(limit);
        }
        if let Some(skip) = skip {
            find_opts = find_opts.skip(skip.try_into().unwrap_or(0));
        }

        let chats = find_opts.await?.try_collect().await?;
        Ok(chats)
    }

    /// Set title/preview and bump `updated_at`; `false` when no chat matched
    pub async fn update_chat(&self, chat_id: ObjectId, update: ChatUpdate) -> Result<bool> {
        let mut set = doc! { "updated_at": bson::to_bson(&Utc::now())? };
        if let Some(title) = update.title {
            set.insert("title", title);
        }
        if let Some(preview) = update.preview {
            set.insert("preview", preview);
        }

        let result = self
            .collection
            .update_one(doc! { "_id": chat_id }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Bump `updated_at`
    pub async fn touch_chat(&self, chat_id: ObjectId) -> Result<()> {
        let update = doc! { "$set": { "updated_at": bson::to_bson(&Utc::now())? } };
        self.collection
            .update_one(doc! { "_id": chat_id }, update)
            .await?;
        Ok(())
    }

    /// Delete chat; `false` when no chat matched
    pub async fn delete_chat(&self, chat_id: ObjectId, user_id: &str) -> Result<bool> {
        let filter = doc! { "_id": chat_id, "user_id": user_id };
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count > 0)
    }
}
