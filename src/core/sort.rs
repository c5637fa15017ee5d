use std::cmp::Ordering;

use crate::models::Listing;

/// Orderings offered by the search page
///
/// Exactly one key is active at a time; there are no secondary keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently listed first (the default)
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Bedrooms,
    SquareFeet,
}

impl SortKey {
    /// Parse the query-string form; unknown values fall back to Newest
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortKey::PriceAsc,
            "price-high" => SortKey::PriceDesc,
            "beds" => SortKey::Bedrooms,
            "sqft" => SortKey::SquareFeet,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-low",
            SortKey::PriceDesc => "price-high",
            SortKey::Bedrooms => "beds",
            SortKey::SquareFeet => "sqft",
        }
    }
}

/// Order listings by the given key
///
/// Stable: ties on the comparison key keep their original relative order,
/// so sorting the same input twice yields identical sequences.
pub fn sort_listings(mut listings: Vec<Listing>, key: SortKey) -> Vec<Listing> {
    listings.sort_by(|a, b| compare(a, b, key));
    listings
}

#[inline]
fn compare(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.listed_date.cmp(&a.listed_date),
        SortKey::PriceAsc => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortKey::PriceDesc => b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal),
        SortKey::Bedrooms => b.bedrooms.cmp(&a.bedrooms),
        SortKey::SquareFeet => b
            .square_feet
            .unwrap_or(0)
            .cmp(&a.square_feet.unwrap_or(0)),
    }
}
