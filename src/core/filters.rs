use crate::models::{FilterCriteria, Listing};

/// Check whether the search term appears in any of the listing's
/// address, city, state or zip fields
///
/// Case-insensitive substring match; a hit on any one field is enough.
#[inline]
pub fn matches_location(listing: &Listing, term: &str) -> bool {
    let term = term.to_lowercase();
    listing.address.to_lowercase().contains(&term)
        || listing.city.to_lowercase().contains(&term)
        || listing.state.to_lowercase().contains(&term)
        || listing.zip.to_lowercase().contains(&term)
}

/// Check an optional field value against optional min/max bounds
///
/// With no bound given the field always passes. When a bound is given, a
/// record that lacks the field fails: a constraint on a field the record
/// does not have disqualifies it rather than being vacuously true.
#[inline]
pub fn in_range<T: PartialOrd + Copy>(value: Option<T>, min: Option<T>, max: Option<T>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let v = match value {
        Some(v) => v,
        None => return false,
    };
    if let Some(lo) = min {
        if v < lo {
            return false;
        }
    }
    if let Some(hi) = max {
        if v > hi {
            return false;
        }
    }
    true
}

/// Check a listing against every populated criterion
///
/// Criteria are AND-combined; empty criteria impose no constraint.
/// Requested feature tags are conjunctive: the listing must carry all of
/// them.
pub fn matches_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if let Some(term) = criteria.location.as_deref() {
        if !term.is_empty() && !matches_location(listing, term) {
            return false;
        }
    }

    if let Some(listing_type) = criteria.listing_type {
        if listing.listing_type != listing_type {
            return false;
        }
    }

    if !in_range(Some(listing.price), criteria.min_price, criteria.max_price) {
        return false;
    }

    if let Some(min_beds) = criteria.min_beds {
        if listing.bedrooms < min_beds {
            return false;
        }
    }

    if let Some(min_baths) = criteria.min_baths {
        if listing.bathrooms < min_baths {
            return false;
        }
    }

    if !criteria.property_types.is_empty()
        && !criteria.property_types.contains(&listing.property_type)
    {
        return false;
    }

    if !in_range(
        listing.square_feet,
        criteria.min_square_feet,
        criteria.max_square_feet,
    ) {
        return false;
    }

    if !in_range(listing.lot_size, criteria.min_lot_size, criteria.max_lot_size) {
        return false;
    }

    if !in_range(
        listing.year_built,
        criteria.min_year_built,
        criteria.max_year_built,
    ) {
        return false;
    }

    if !criteria.features.is_empty() {
        let all_present = criteria
            .features
            .iter()
            .all(|tag| listing.features.contains(tag));
        if !all_present {
            return false;
        }
    }

    true
}
