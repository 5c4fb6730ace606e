//! Client repository for all MongoDB operations related to client profiles.

use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_CLIENTS;
use crate::errors::ApiError;
use crate::models::Client;

/// Repository for client-profile database operations.
pub struct ClientRepository {
    collection: Collection<Client>,
}

impl ClientRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_CLIENTS),
        }
    }

    /// Create the unique index on `user_id`.
    ///
    /// This index is what makes the client-user pairing strictly one-to-one:
    /// a second provisioning attempt for the same user fails with a
    /// duplicate-key error instead of inserting a second profile.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for clients collection...");

        let indexes = vec![IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build()];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Insert a new client profile.
    pub async fn insert(&self, client: &Client) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(client).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    /// Find a client by their ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Client>, ApiError> {
        debug!("Repository: Finding client by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Delete the client paired with a user. Returns the number removed
    /// (0 or 1 given the unique index).
    pub async fn delete_by_user_id(&self, user_id: ObjectId) -> Result<u64, ApiError> {
        let result = self
            .collection
            .delete_many(doc! { "user_id": user_id })
            .await?;
        Ok(result.deleted_count)
    }
}
