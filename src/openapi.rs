use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{
    ArtistRequest, ArtistResponse, ClientResponse, CreateWorkRequest, RegisterRequest,
    UserResponse, WorkResponse, WorkType,
};

/// OpenAPI documentation for the Portfolio API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "REST API for artist portfolios: account registration with auto-provisioned client profiles, artists, and their works."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Accounts", description = "Account registration and deletion"),
        (name = "Clients", description = "Auto-provisioned client profiles"),
        (name = "Artists", description = "Artist management"),
        (name = "Works", description = "Works catalog and management")
    ),
    paths(
        crate::handlers::register,
        crate::handlers::delete_user,
        crate::handlers::get_client,
        crate::handlers::get_artist,
        crate::handlers::create_artist,
        crate::handlers::update_artist,
        crate::handlers::delete_artist,
        crate::handlers::list_works,
        crate::handlers::create_work,
        crate::handlers::delete_work,
        crate::routes::health_check
    ),
    components(
        schemas(
            RegisterRequest,
            UserResponse,
            ClientResponse,
            ArtistRequest,
            ArtistResponse,
            CreateWorkRequest,
            WorkResponse,
            WorkType,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;
