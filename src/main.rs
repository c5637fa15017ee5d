mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use routes::AppState;
use services::{
    ContactBook, FavoriteService, JsonFileStore, KeyValueStore, ListingStore, NoteStore, TourBook,
};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Haven listings service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the listing catalog fixture
    let store = match ListingStore::load_from_file(&settings.data.listings_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!(
                "Failed to load listings from {}: {}",
                settings.data.listings_path, e
            );
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "Listings fixture required"));
        }
    };

    info!("Listing store initialized ({} listings)", store.len());

    // Open device-local storage for favorites and notes
    let storage: Arc<dyn KeyValueStore> = match JsonFileStore::open(&settings.storage.state_dir) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!(
                "Failed to open state directory {}: {}",
                settings.storage.state_dir, e
            );
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "State directory required"));
        }
    };

    let favorites = Arc::new(FavoriteService::load(storage.clone()));
    let notes = Arc::new(NoteStore::load(storage));

    info!(
        "Local state rehydrated from {} ({} favorites)",
        settings.storage.state_dir,
        favorites.ids().len()
    );

    // Tour and contact books start empty; they live for the process only
    let tours = Arc::new(TourBook::new());
    let contacts = Arc::new(ContactBook::new());

    // Build application state
    let app_state = AppState {
        store,
        favorites,
        notes,
        tours,
        contacts,
        featured_default_limit: settings.catalog.featured_limit.unwrap_or(6),
        featured_max_limit: settings.catalog.max_limit.unwrap_or(60),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
