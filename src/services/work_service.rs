//! Work service: listing with filters, creation, deletion.

use log::{debug, info};
use std::sync::Arc;

use crate::constants::{ERR_INVALID_WORK_TYPE, ERR_WORK_ARTIST_MISSING, ERR_WORK_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{CreateWorkRequest, Work, WorkResponse, WorkType};
use crate::repositories::work_repository::build_work_filter;
use crate::repositories::{ArtistRepository, WorkRepository};
use crate::validators::parse_object_id;

pub struct WorkService {
    works: Arc<WorkRepository>,
    artists: Arc<ArtistRepository>,
}

impl WorkService {
    pub fn new(works: Arc<WorkRepository>, artists: Arc<ArtistRepository>) -> Self {
        Self { works, artists }
    }

    /// List works, optionally filtered by exact work_type and/or a
    /// case-insensitive search over the owning artist's name.
    pub async fn list_works(
        &self,
        work_type: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<WorkResponse>, ApiError> {
        let type_filter = match work_type {
            Some(raw) => Some(
                WorkType::parse(raw)
                    .ok_or_else(|| ApiError::BadRequest(ERR_INVALID_WORK_TYPE.to_string()))?,
            ),
            None => None,
        };

        // The artist-name search resolves to owning-artist ids first, then
        // composes with the type filter.
        let artist_ids = match search.map(str::trim) {
            Some(term) if !term.is_empty() => Some(self.artists.find_ids_by_name(term).await?),
            _ => None,
        };

        let filter = build_work_filter(type_filter, artist_ids.as_deref());
        debug!("Listing works with filter: {:?}", filter);

        let works = self.works.find_with_filter(filter).await?;
        Ok(works.into_iter().map(WorkResponse::from).collect())
    }

    /// Create a work for an existing artist.
    pub async fn create_work(&self, req: CreateWorkRequest) -> Result<WorkResponse, ApiError> {
        let work_type = WorkType::parse(&req.work_type)
            .ok_or_else(|| ApiError::ValidationError(vec![ERR_INVALID_WORK_TYPE.to_string()]))?;

        let artist_id = parse_object_id(&req.artist)?;
        if self.artists.find_by_id(artist_id).await?.is_none() {
            return Err(ApiError::IntegrityError(ERR_WORK_ARTIST_MISSING.to_string()));
        }

        let work = Work {
            id: None,
            link: req.link,
            work_type,
            artist_id,
        };
        let work_id = self.works.insert(&work).await?;
        info!("Created work {} for artist {}", work_id, artist_id);

        Ok(WorkResponse::from(Work {
            id: Some(work_id),
            ..work
        }))
    }

    /// Delete a work by id.
    pub async fn delete_work(&self, id: &str) -> Result<(), ApiError> {
        let work_id = parse_object_id(id)?;

        if !self.works.delete(work_id).await? {
            return Err(ApiError::NotFound(ERR_WORK_NOT_FOUND.to_string()));
        }

        info!("Deleted work {}", work_id);
        Ok(())
    }
}
