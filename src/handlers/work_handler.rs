//! Work handlers: public listing plus management operations.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{CreateWorkRequest, WorkResponse};
use crate::services::WorkService;
use crate::validators::validation_errors_to_api_error;

/// Query parameters for the works listing.
#[derive(Debug, Deserialize)]
pub struct WorkListQuery {
    pub work_type: Option<String>,
    pub search: Option<String>,
}

/// List all works, filterable by type and artist-name search
///
/// Unauthenticated access is intentional: this is the public catalog.
#[utoipa::path(
    get,
    path = "/api/works",
    tag = "Works",
    params(
        ("work_type" = Option<String>, Query, description = "Exact match: 'Youtube', 'Instagram', or 'Other'"),
        ("search" = Option<String>, Query, description = "Case-insensitive search over the owning artist's name")
    ),
    responses(
        (status = 200, description = "Matching works", body = Vec<WorkResponse>),
        (status = 400, description = "Unknown work_type", body = crate::errors::ErrorResponse)
    )
)]
pub async fn list_works(
    work_service: web::Data<WorkService>,
    query: web::Query<WorkListQuery>,
) -> Result<HttpResponse, ApiError> {
    let works = work_service
        .list_works(query.work_type.as_deref(), query.search.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(works))
}

/// Create a work for an existing artist
#[utoipa::path(
    post,
    path = "/api/works",
    tag = "Works",
    request_body = CreateWorkRequest,
    responses(
        (status = 201, description = "Work created", body = WorkResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 409, description = "Artist does not exist", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_work(
    work_service: web::Data<WorkService>,
    body: web::Json<CreateWorkRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let work = work_service.create_work(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(work))
}

/// Delete a work
#[utoipa::path(
    delete,
    path = "/api/works/{id}",
    tag = "Works",
    params(
        ("id" = String, Path, description = "Work ID")
    ),
    responses(
        (status = 204, description = "Work deleted"),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Work not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_work(
    work_service: web::Data<WorkService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    work_service.delete_work(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
