use serde::{Deserialize, Serialize};

use crate::models::domain::AnnotatedListing;

/// Response for the listing search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub listings: Vec<AnnotatedListing>,
    pub total: usize,
}

/// Response after toggling a favorite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub id: u32,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

/// Response for the per-listing note endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: u32,
    pub note: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
