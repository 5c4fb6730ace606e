use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // Account routes (public sign-up)
            .service(
                web::scope("/auth").route("/register", web::post().to(handlers::register)),
            )
            // User routes
            .service(
                web::scope("/users").route("/{id}", web::delete().to(handlers::delete_user)),
            )
            // Client profiles (read-only; created by provisioning only)
            .service(
                web::scope("/clients").route("/{id}", web::get().to(handlers::get_client)),
            )
            // Artist routes
            .service(
                web::scope("/artists")
                    .route("", web::post().to(handlers::create_artist))
                    .route("/{id}", web::get().to(handlers::get_artist))
                    .route("/{id}", web::put().to(handlers::update_artist))
                    .route("/{id}", web::delete().to(handlers::delete_artist)),
            )
            // Work routes (listing is public)
            .service(
                web::scope("/works")
                    .route("", web::get().to(handlers::list_works))
                    .route("", web::post().to(handlers::create_work))
                    .route("/{id}", web::delete().to(handlers::delete_work)),
            ),
    );
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running")
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}
