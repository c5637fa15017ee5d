// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnnotatedListing, ContactRequest, ContactStatus, FilterCriteria, Listing, ListingType,
    PropertyType, Tour, TourStatus, TourType,
};
pub use requests::{
    ContactAgentRequest, SaveNoteRequest, ScheduleTourRequest, UpdateContactStatusRequest,
    UpdateTourRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, NoteResponse, SearchResponse, ToggleFavoriteResponse,
};
