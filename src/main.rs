mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::repositories::{ArtistRepository, ClientRepository, UserRepository, WorkRepository};
use crate::services::{
    AccountService, ArtistService, ClientProvisioner, ClientService, ProvisioningHook, WorkService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    // Repositories
    let user_repository = Arc::new(UserRepository::new(&db));
    let client_repository = Arc::new(ClientRepository::new(&db));
    let artist_repository = Arc::new(ArtistRepository::new(&db));
    let work_repository = Arc::new(WorkRepository::new(&db));

    // Unique indexes back the username and one-client-per-user constraints
    user_repository
        .create_indexes()
        .await
        .expect("Failed to create user indexes");
    client_repository
        .create_indexes()
        .await
        .expect("Failed to create client indexes");

    // Services; the provisioning hook is wired explicitly here
    let provisioner: Arc<dyn ProvisioningHook> =
        Arc::new(ClientProvisioner::new(
            Arc::clone(&client_repository) as Arc<dyn services::provisioning::ClientStore>
        ));
    let account_service = web::Data::new(AccountService::new(
        Arc::clone(&user_repository),
        Arc::clone(&client_repository),
        provisioner,
    ));
    let client_service = web::Data::new(ClientService::new(Arc::clone(&client_repository)));
    let artist_service = web::Data::new(ArtistService::new(
        Arc::clone(&artist_repository),
        Arc::clone(&work_repository),
    ));
    let work_service = web::Data::new(WorkService::new(
        Arc::clone(&work_repository),
        Arc::clone(&artist_repository),
    ));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(account_service.clone())
            .app_data(client_service.clone())
            .app_data(artist_service.clone())
            .app_data(work_service.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
