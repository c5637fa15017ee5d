//! Query-string form of the search criteria
//!
//! The search page keeps its filter state in the URL so results are
//! shareable and survive navigation. `encode` omits anything empty;
//! `decode` ignores anything it does not recognize. The two functions are
//! inverses for every criteria object the filter surface can produce.

use std::str::FromStr;

use crate::models::{FilterCriteria, PropertyType};

/// Serialize criteria to a query string
///
/// Absent and empty criteria are omitted; list-valued criteria are
/// comma-joined. Values are percent-encoded.
pub fn encode(criteria: &FilterCriteria) -> String {
    let mut pairs: Vec<String> = Vec::new();

    let mut push = |key: &str, value: &str| {
        if !value.is_empty() {
            pairs.push(format!("{}={}", key, urlencoding::encode(value)));
        }
    };

    if let Some(location) = criteria.location.as_deref() {
        push("location", location);
    }
    if let Some(listing_type) = criteria.listing_type {
        push("type", &listing_type.to_string());
    }
    if let Some(v) = criteria.min_price {
        push("minPrice", &v.to_string());
    }
    if let Some(v) = criteria.max_price {
        push("maxPrice", &v.to_string());
    }
    if let Some(v) = criteria.min_beds {
        push("minBeds", &v.to_string());
    }
    if let Some(v) = criteria.min_baths {
        push("minBaths", &v.to_string());
    }
    if !criteria.property_types.is_empty() {
        let joined = criteria
            .property_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",");
        push("propertyTypes", &joined);
    }
    if let Some(v) = criteria.min_square_feet {
        push("minSquareFeet", &v.to_string());
    }
    if let Some(v) = criteria.max_square_feet {
        push("maxSquareFeet", &v.to_string());
    }
    if let Some(v) = criteria.min_lot_size {
        push("minLotSize", &v.to_string());
    }
    if let Some(v) = criteria.max_lot_size {
        push("maxLotSize", &v.to_string());
    }
    if let Some(v) = criteria.min_year_built {
        push("minYearBuilt", &v.to_string());
    }
    if let Some(v) = criteria.max_year_built {
        push("maxYearBuilt", &v.to_string());
    }
    if !criteria.features.is_empty() {
        push("features", &criteria.features.join(","));
    }

    pairs.join("&")
}

/// Parse criteria out of a query string
///
/// Unrecognized parameters and unparseable values are ignored, as are
/// parameters with empty values. A leading `?` is tolerated.
pub fn decode(query: &str) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&') {
        let (key, raw_value) = match pair.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };
        let value = match urlencoding::decode(raw_value) {
            Ok(v) => v.into_owned(),
            Err(_) => continue,
        };
        if value.is_empty() {
            continue;
        }

        match key {
            "location" => criteria.location = Some(value),
            "type" => criteria.listing_type = value.parse().ok(),
            "minPrice" => criteria.min_price = value.parse().ok(),
            "maxPrice" => criteria.max_price = value.parse().ok(),
            "minBeds" => criteria.min_beds = value.parse().ok(),
            "minBaths" => criteria.min_baths = value.parse().ok(),
            "propertyTypes" => {
                criteria.property_types = value
                    .split(',')
                    .filter_map(|s| PropertyType::from_str(s).ok())
                    .collect();
            }
            "minSquareFeet" => criteria.min_square_feet = value.parse().ok(),
            "maxSquareFeet" => criteria.max_square_feet = value.parse().ok(),
            "minLotSize" => criteria.min_lot_size = value.parse().ok(),
            "maxLotSize" => criteria.max_lot_size = value.parse().ok(),
            "minYearBuilt" => criteria.min_year_built = value.parse().ok(),
            "maxYearBuilt" => criteria.max_year_built = value.parse().ok(),
            "features" => {
                criteria.features = value
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            _ => {}
        }
    }

    criteria
}
