use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::collections::HashMap;

use crate::core::{by_listing_type, search, sort_listings, urlstate, SortKey};
use crate::models::{
    ErrorResponse, HealthResponse, ListingType, NoteResponse, SaveNoteRequest, SearchResponse,
    ToggleFavoriteResponse,
};
use crate::routes::AppState;
use crate::services::StoreError;

/// Configure all listing-related routes
///
/// Fixed paths are registered before the `{id}` matcher.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/listings", web::get().to(search_listings))
        .route("/listings/featured", web::get().to(featured_listings))
        .route("/listings/favorites", web::get().to(list_favorites))
        .route("/listings/{id}", web::get().to(get_listing))
        .route("/listings/{id}/favorite", web::post().to(toggle_favorite))
        .route("/listings/{id}/note", web::get().to(get_note))
        .route("/listings/{id}/note", web::put().to(save_note))
        .route("/listings/{id}/note", web::delete().to(delete_note));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.store.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search the catalog
///
/// GET /api/v1/listings?location=...&type=Buy&minPrice=...&sort=price-low
///
/// The filter criteria are decoded from the raw query string; `sort` is
/// handled separately since it orders results rather than narrowing them.
async fn search_listings(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let criteria = urlstate::decode(req.query_string());
    let sort_key = query
        .get("sort")
        .map(|s| SortKey::parse(s))
        .unwrap_or_default();

    let results = search(state.store.all(), &criteria);
    let results = sort_listings(results, sort_key);
    let listings = state.favorites.annotate_all(results);

    tracing::debug!(
        "Search returned {} of {} listings (sort: {})",
        listings.len(),
        state.store.len(),
        sort_key.as_str()
    );

    HttpResponse::Ok().json(SearchResponse {
        total: listings.len(),
        listings,
    })
}

/// Capped by-listing-type slice for the homepage rows
///
/// GET /api/v1/listings/featured?type=Buy&limit=6
async fn featured_listings(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let listing_type = query
        .get("type")
        .and_then(|s| s.parse::<ListingType>().ok())
        .unwrap_or(ListingType::Buy);

    let limit = query
        .get("limit")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(state.featured_default_limit)
        .min(state.featured_max_limit);

    let results = by_listing_type(state.store.all(), listing_type, Some(limit));
    let listings = state.favorites.annotate_all(results);

    HttpResponse::Ok().json(SearchResponse {
        total: listings.len(),
        listings,
    })
}

/// Fetch a single listing with its favorite status
async fn get_listing(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get(id) {
        Ok(listing) => HttpResponse::Ok().json(state.favorites.annotate(listing)),
        Err(StoreError::NotFound(_)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Listing not found".to_string(),
            message: format!("No listing with id {}", id),
            status_code: 404,
        }),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to fetch listing".to_string(),
            message: e.to_string(),
            status_code: 500,
        }),
    }
}

/// Flip a listing's favorite status
///
/// POST /api/v1/listings/{id}/favorite
async fn toggle_favorite(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    match state.favorites.toggle(id) {
        Ok(is_favorite) => {
            tracing::debug!("Toggled favorite {} -> {}", id, is_favorite);
            HttpResponse::Ok().json(ToggleFavoriteResponse { id, is_favorite })
        }
        Err(e) => {
            tracing::error!("Failed to persist favorite toggle for {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to update favorites".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// All favorited listings in catalog order
async fn list_favorites(state: web::Data<AppState>) -> impl Responder {
    let listings = state.favorites.list_favorites(&state.store);

    HttpResponse::Ok().json(SearchResponse {
        total: listings.len(),
        listings,
    })
}

/// The saved note for a listing, if any
async fn get_note(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    HttpResponse::Ok().json(NoteResponse {
        id,
        note: state.notes.get(id),
    })
}

/// Save (or blank out) the note for a listing
async fn save_note(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    req: web::Json<SaveNoteRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match state.notes.save(id, &req.note) {
        Ok(()) => HttpResponse::Ok().json(NoteResponse {
            id,
            note: state.notes.get(id),
        }),
        Err(e) => {
            tracing::error!("Failed to persist note for {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save note".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Delete the note for a listing
async fn delete_note(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    match state.notes.remove(id) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to delete note".to_string(),
            message: e.to_string(),
            status_code: 500,
        }),
    }
}
