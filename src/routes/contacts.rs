use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ContactAgentRequest, ErrorResponse, UpdateContactStatusRequest};
use crate::routes::AppState;
use crate::services::ContactError;

/// Configure all contact-request routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/contacts", web::post().to(create_contact))
        .route("/contacts", web::get().to(list_contacts))
        .route("/contacts/{id}", web::get().to(get_contact))
        .route("/contacts/{id}/status", web::put().to(update_status))
        .route("/contacts/{id}", web::delete().to(delete_contact))
        .route("/listings/{id}/contacts", web::get().to(contacts_for_listing));
}

fn not_found(id: u32) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Contact request not found".to_string(),
        message: format!("No contact request with id {}", id),
        status_code: 404,
    })
}

/// File an agent contact request
///
/// POST /api/v1/contacts
async fn create_contact(
    state: web::Data<AppState>,
    req: web::Json<ContactAgentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_contact request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let contact = state.contacts.create(req.into_inner());
    HttpResponse::Created().json(contact)
}

async fn list_contacts(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.contacts.all())
}

async fn get_contact(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.contacts.get(id) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(ContactError::NotFound(_)) => not_found(id),
    }
}

async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    req: web::Json<UpdateContactStatusRequest>,
) -> impl Responder {
    let id = path.into_inner();
    match state.contacts.update_status(id, req.status) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(ContactError::NotFound(_)) => not_found(id),
    }
}

async fn delete_contact(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();
    match state.contacts.delete(id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ContactError::NotFound(_)) => not_found(id),
    }
}

/// Contact requests filed against one listing
async fn contacts_for_listing(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let listing_id = path.into_inner();
    HttpResponse::Ok().json(state.contacts.by_listing(listing_id))
}
