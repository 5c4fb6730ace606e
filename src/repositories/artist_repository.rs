//! Artist repository for all MongoDB operations related to artists.

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_ARTISTS;
use crate::errors::ApiError;
use crate::models::Artist;

/// Repository for artist database operations.
pub struct ArtistRepository {
    collection: Collection<Artist>,
}

impl ArtistRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_ARTISTS),
        }
    }

    /// Insert a new artist.
    pub async fn insert(&self, artist: &Artist) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(artist).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    /// Find an artist by their ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Artist>, ApiError> {
        debug!("Repository: Finding artist by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Rename an artist. Returns true if a document matched.
    pub async fn update_name(&self, id: ObjectId, name: &str) -> Result<bool, ApiError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "name": name } })
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Delete an artist. Returns true if a document was removed.
    pub async fn delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Find the ids of all artists whose name contains the search term
    /// (case-insensitive substring match).
    pub async fn find_ids_by_name(&self, search: &str) -> Result<Vec<ObjectId>, ApiError> {
        let pattern = regex::escape(search.trim());
        let name_regex = mongodb::bson::Regex {
            pattern,
            options: "i".to_string(),
        };

        debug!("Repository: Searching artists by name: {:?}", search);
        let cursor = self
            .collection
            .find(doc! { "name": { "$regex": name_regex } })
            .await?;
        let artists: Vec<Artist> = cursor.try_collect().await?;

        Ok(artists.into_iter().filter_map(|a| a.id).collect())
    }
}
