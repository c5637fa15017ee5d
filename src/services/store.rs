use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::Listing;

/// Errors that can occur when loading or querying the listing catalog
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read listings fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse listings fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Listing not found: {0}")]
    NotFound(u32),
}

/// Read-only catalog of listings
///
/// Loaded once at startup from a JSON fixture and never mutated. Lookups
/// by id are the only operation that can fail.
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load the catalog from a JSON fixture file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let listings: Vec<Listing> = serde_json::from_str(&raw)?;

        tracing::info!(
            "Loaded {} listings from {}",
            listings.len(),
            path.as_ref().display()
        );

        Ok(Self { listings })
    }

    /// The full catalog in fixture order
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    /// Fetch a single listing by id
    ///
    /// The only lookup in the catalog that raises `NotFound`; search and
    /// list operations simply return fewer records.
    pub fn get(&self, id: u32) -> Result<&Listing, StoreError> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
