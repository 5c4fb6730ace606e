//! Artist handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::debug;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{ArtistRequest, ArtistResponse};
use crate::services::ArtistService;
use crate::validators::validation_errors_to_api_error;

/// Get an artist by ID, with its works fully serialized
#[utoipa::path(
    get,
    path = "/api/artists/{id}",
    tag = "Artists",
    params(
        ("id" = String, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Artist found", body = ArtistResponse),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Artist not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_artist(
    artist_service: web::Data<ArtistService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let artist_id = path.into_inner();
    debug!("Fetching artist with id: {}", artist_id);

    let artist = artist_service.get_artist_by_id(&artist_id).await?;
    Ok(HttpResponse::Ok().json(artist))
}

/// Create a new artist
#[utoipa::path(
    post,
    path = "/api/artists",
    tag = "Artists",
    request_body = ArtistRequest,
    responses(
        (status = 201, description = "Artist created", body = ArtistResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_artist(
    artist_service: web::Data<ArtistService>,
    body: web::Json<ArtistRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let artist = artist_service.create_artist(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(artist))
}

/// Rename an artist
#[utoipa::path(
    put,
    path = "/api/artists/{id}",
    tag = "Artists",
    params(
        ("id" = String, Path, description = "Artist ID")
    ),
    request_body = ArtistRequest,
    responses(
        (status = 200, description = "Artist updated", body = ArtistResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 404, description = "Artist not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_artist(
    artist_service: web::Data<ArtistService>,
    path: web::Path<String>,
    body: web::Json<ArtistRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let artist = artist_service
        .rename_artist(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(artist))
}

/// Delete an artist and all of its works
#[utoipa::path(
    delete,
    path = "/api/artists/{id}",
    tag = "Artists",
    params(
        ("id" = String, Path, description = "Artist ID")
    ),
    responses(
        (status = 204, description = "Artist and its works deleted"),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Artist not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_artist(
    artist_service: web::Data<ArtistService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    artist_service.delete_artist(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
