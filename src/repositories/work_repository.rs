//! Work repository for all MongoDB operations related to works.

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_WORKS;
use crate::errors::ApiError;
use crate::models::{Work, WorkType};

/// Build the works query filter from the optional type filter and the
/// resolved owning-artist ids. Filters compose with AND; an empty document
/// matches everything.
pub fn build_work_filter(work_type: Option<WorkType>, artist_ids: Option<&[ObjectId]>) -> Document {
    let mut filter = doc! {};

    if let Some(work_type) = work_type {
        filter.insert("work_type", work_type.as_str());
    }

    if let Some(ids) = artist_ids {
        filter.insert("artist_id", doc! { "$in": ids.to_vec() });
    }

    filter
}

/// Repository for work database operations.
pub struct WorkRepository {
    collection: Collection<Work>,
}

impl WorkRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_WORKS),
        }
    }

    /// Insert a new work.
    pub async fn insert(&self, work: &Work) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(work).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    /// Find all works matching a filter document.
    pub async fn find_with_filter(&self, filter: Document) -> Result<Vec<Work>, ApiError> {
        debug!("Repository: Finding works with filter: {:?}", filter);
        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Find all works owned by an artist.
    pub async fn find_by_artist_id(&self, artist_id: ObjectId) -> Result<Vec<Work>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "artist_id": artist_id })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Delete a work. Returns true if a document was removed.
    pub async fn delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Delete every work owned by an artist. Returns the number removed.
    pub async fn delete_by_artist_id(&self, artist_id: ObjectId) -> Result<u64, ApiError> {
        let result = self
            .collection
            .delete_many(doc! { "artist_id": artist_id })
            .await?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        assert_eq!(build_work_filter(None, None), doc! {});
    }

    #[test]
    fn type_filter_uses_the_canonical_encoding() {
        let filter = build_work_filter(Some(WorkType::Youtube), None);
        assert_eq!(filter, doc! { "work_type": "Youtube" });
    }

    #[test]
    fn artist_filter_matches_any_resolved_id() {
        let ids = vec![ObjectId::new(), ObjectId::new()];
        let filter = build_work_filter(None, Some(&ids));
        assert_eq!(filter, doc! { "artist_id": { "$in": ids } });
    }

    #[test]
    fn combined_filters_compose_with_and() {
        let ids = vec![ObjectId::new()];
        let filter = build_work_filter(Some(WorkType::Instagram), Some(&ids));
        assert_eq!(
            filter,
            doc! { "work_type": "Instagram", "artist_id": { "$in": ids } }
        );
    }
}
