//! Haven Listings - listing search and favorites service for the Haven real-estate app
//!
//! This library provides the query core used by the Haven browsing app:
//! criteria filtering over the in-memory listing catalog, a stable sort
//! stage, the query-string criteria codec, and the locally persisted
//! favorite set.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{by_listing_type, search, sort_listings, urlstate, SortKey};
pub use crate::models::{AnnotatedListing, FilterCriteria, Listing, ListingType, PropertyType};
pub use crate::services::{FavoriteService, ListingStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(urlstate::encode(&criteria), "");
    }
}
