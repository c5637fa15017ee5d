use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, ScheduleTourRequest, UpdateTourRequest};
use crate::routes::AppState;
use crate::services::TourError;

/// Configure all tour-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/tours", web::post().to(schedule_tour))
        .route("/tours", web::get().to(list_tours))
        .route("/tours/upcoming", web::get().to(upcoming_tours))
        .route("/tours/{id}", web::get().to(get_tour))
        .route("/tours/{id}", web::put().to(update_tour))
        .route("/tours/{id}/cancel", web::post().to(cancel_tour))
        .route("/tours/{id}", web::delete().to(delete_tour))
        .route("/listings/{id}/tours", web::get().to(tours_for_listing));
}

fn not_found(id: u32) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Tour not found".to_string(),
        message: format!("No tour with id {}", id),
        status_code: 404,
    })
}

/// Schedule a tour
///
/// POST /api/v1/tours
async fn schedule_tour(
    state: web::Data<AppState>,
    req: web::Json<ScheduleTourRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for schedule_tour request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let tour = state.tours.create(req.into_inner());
    HttpResponse::Created().json(tour)
}

/// All tours, newest booking first
async fn list_tours(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.tours.all())
}

/// Tours still scheduled and in the future, soonest first
async fn upcoming_tours(state: web::Data<AppState>) -> impl Responder {
    let now = chrono::Utc::now().naive_utc();
    HttpResponse::Ok().json(state.tours.upcoming(now))
}

async fn get_tour(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.tours.get(id) {
        Ok(tour) => HttpResponse::Ok().json(tour),
        Err(TourError::NotFound(_)) => not_found(id),
    }
}

/// Reschedule or amend a tour
async fn update_tour(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    req: web::Json<UpdateTourRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let id = path.into_inner();
    match state.tours.update(id, req.into_inner()) {
        Ok(tour) => HttpResponse::Ok().json(tour),
        Err(TourError::NotFound(_)) => not_found(id),
    }
}

/// Cancel a tour, keeping its record
async fn cancel_tour(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.tours.cancel(id) {
        Ok(tour) => HttpResponse::Ok().json(tour),
        Err(TourError::NotFound(_)) => not_found(id),
    }
}

async fn delete_tour(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.tours.delete(id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(TourError::NotFound(_)) => not_found(id),
    }
}

/// Tours booked against one listing
async fn tours_for_listing(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let listing_id = path.into_inner();
    HttpResponse::Ok().json(state.tours.by_listing(listing_id))
}
