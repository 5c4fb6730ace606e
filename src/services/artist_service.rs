//! Artist service for CRUD operations and the work cascade.

use log::{debug, info};
use std::sync::Arc;

use crate::constants::ERR_ARTIST_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::{Artist, ArtistRequest, ArtistResponse};
use crate::repositories::{ArtistRepository, WorkRepository};
use crate::validators::parse_object_id;

pub struct ArtistService {
    artists: Arc<ArtistRepository>,
    works: Arc<WorkRepository>,
}

impl ArtistService {
    pub fn new(artists: Arc<ArtistRepository>, works: Arc<WorkRepository>) -> Self {
        Self { artists, works }
    }

    /// Fetch an artist with all of its works serialized.
    pub async fn get_artist_by_id(&self, id: &str) -> Result<ArtistResponse, ApiError> {
        let artist_id = parse_object_id(id)?;

        let artist = self
            .artists
            .find_by_id(artist_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_ARTIST_NOT_FOUND.to_string()))?;

        let works = self.works.find_by_artist_id(artist_id).await?;
        Ok(ArtistResponse::with_works(artist, works))
    }

    /// Create a new artist with no works.
    pub async fn create_artist(&self, req: ArtistRequest) -> Result<ArtistResponse, ApiError> {
        let artist = Artist {
            id: None,
            name: req.name,
        };
        let artist_id = self.artists.insert(&artist).await?;
        info!("Created artist {}", artist_id);

        Ok(ArtistResponse::with_works(
            Artist {
                id: Some(artist_id),
                ..artist
            },
            Vec::new(),
        ))
    }

    /// Rename an artist.
    pub async fn rename_artist(
        &self,
        id: &str,
        req: ArtistRequest,
    ) -> Result<ArtistResponse, ApiError> {
        let artist_id = parse_object_id(id)?;

        if !self.artists.update_name(artist_id, &req.name).await? {
            return Err(ApiError::NotFound(ERR_ARTIST_NOT_FOUND.to_string()));
        }

        let works = self.works.find_by_artist_id(artist_id).await?;
        Ok(ArtistResponse::with_works(
            Artist {
                id: Some(artist_id),
                name: req.name,
            },
            works,
        ))
    }

    /// Delete an artist and cascade to its works.
    ///
    /// The cascade is explicit: works are removed first, then the artist, so
    /// no work is ever left pointing at a missing artist.
    pub async fn delete_artist(&self, id: &str) -> Result<(), ApiError> {
        let artist_id = parse_object_id(id)?;

        if self.artists.find_by_id(artist_id).await?.is_none() {
            return Err(ApiError::NotFound(ERR_ARTIST_NOT_FOUND.to_string()));
        }

        let removed = self.works.delete_by_artist_id(artist_id).await?;
        debug!("Cascade removed {} work(s) for artist {}", removed, artist_id);

        self.artists.delete(artist_id).await?;
        info!("Deleted artist {}", artist_id);
        Ok(())
    }
}
