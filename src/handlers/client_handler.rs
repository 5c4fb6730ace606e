//! Client profile handlers.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::errors::ApiError;
use crate::models::ClientResponse;
use crate::services::ClientService;

/// Get a client profile by ID
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(
        ("id" = String, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Client not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_client(
    client_service: web::Data<ClientService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let client_id = path.into_inner();
    debug!("Fetching client with id: {}", client_id);

    let client = client_service.get_client_by_id(&client_id).await?;
    Ok(HttpResponse::Ok().json(client))
}
