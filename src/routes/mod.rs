// Route exports
pub mod contacts;
pub mod listings;
pub mod tours;

use actix_web::web;
use std::sync::Arc;

use crate::services::{ContactBook, FavoriteService, ListingStore, NoteStore, TourBook};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ListingStore>,
    pub favorites: Arc<FavoriteService>,
    pub notes: Arc<NoteStore>,
    pub tours: Arc<TourBook>,
    pub contacts: Arc<ContactBook>,
    /// Featured-row cap when the client does not ask for one
    pub featured_default_limit: usize,
    /// Upper bound on any client-requested result cap
    pub featured_max_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(listings::configure)
            .configure(tours::configure)
            .configure(contacts::configure),
    );
}
