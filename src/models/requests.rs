use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ContactStatus, TourType};

/// Request to schedule a property tour
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleTourRequest {
    #[serde(alias = "listing_id", rename = "listingId")]
    pub listing_id: u32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    #[serde(alias = "time_slot", rename = "timeSlot")]
    pub time_slot: String,
    #[serde(alias = "tour_type", rename = "tourType", default = "default_tour_type")]
    pub tour_type: TourType,
    #[serde(alias = "special_requests", rename = "specialRequests", default)]
    pub special_requests: Option<String>,
}

fn default_tour_type() -> TourType {
    TourType::InPerson
}

/// Partial update of an existing tour; absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTourRequest {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1))]
    #[serde(alias = "time_slot", rename = "timeSlot", default)]
    pub time_slot: Option<String>,
    #[serde(alias = "tour_type", rename = "tourType", default)]
    pub tour_type: Option<TourType>,
    #[serde(alias = "special_requests", rename = "specialRequests", default)]
    pub special_requests: Option<String>,
}

/// Request to contact the listing agent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactAgentRequest {
    #[serde(alias = "listing_id", rename = "listingId")]
    pub listing_id: u32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Request to change the status of a contact request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}

/// Request to save a note on a listing
///
/// A blank note deletes any stored note for the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveNoteRequest {
    pub note: String,
}
