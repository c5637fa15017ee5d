// Core algorithm exports
pub mod filters;
pub mod search;
pub mod sort;
pub mod urlstate;

pub use filters::{in_range, matches_criteria, matches_location};
pub use search::{by_listing_type, search};
pub use sort::{sort_listings, SortKey};
