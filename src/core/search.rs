use crate::core::filters::matches_criteria;
use crate::models::{FilterCriteria, Listing, ListingType};

/// Filter the catalog against the given criteria
///
/// Pure single pass over the records: every populated criterion is applied
/// as an AND-combined predicate and encounter order is preserved. Criteria
/// that exclude everything yield an empty result, never an error.
pub fn search(records: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    records
        .iter()
        .filter(|listing| matches_criteria(listing, criteria))
        .cloned()
        .collect()
}

/// Listings of one listing type, capped by simple truncation
///
/// Used for the homepage "featured" rows. Truncation happens after the
/// filter and keeps encounter order.
pub fn by_listing_type(
    records: &[Listing],
    listing_type: ListingType,
    limit: Option<usize>,
) -> Vec<Listing> {
    let mut results: Vec<Listing> = records
        .iter()
        .filter(|listing| listing.listing_type == listing_type)
        .cloned()
        .collect();

    if let Some(limit) = limit {
        results.truncate(limit);
    }

    results
}
