// Unit tests for the Haven listings query core

use chrono::NaiveDate;
use haven_listings::core::{
    filters::{in_range, matches_criteria, matches_location},
    sort::{sort_listings, SortKey},
    urlstate,
};
use haven_listings::models::{FilterCriteria, Listing, ListingType, PropertyType};

fn create_listing(id: u32, price: f64, bedrooms: u32, listing_type: ListingType) -> Listing {
    Listing {
        id,
        address: format!("{} Willow Bend Drive", id),
        city: "Nashville".to_string(),
        state: "TN".to_string(),
        zip: "37203".to_string(),
        price,
        bedrooms,
        bathrooms: 2.0,
        square_feet: Some(1600),
        lot_size: Some(0.3),
        year_built: Some(2010),
        property_type: PropertyType::SingleFamilyHome,
        listing_type,
        images: vec![format!("/images/listings/{}-front.jpg", id)],
        features: vec!["Garage".to_string()],
        listed_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    }
}

#[test]
fn test_location_match_is_case_insensitive() {
    let listing = create_listing(1, 300_000.0, 3, ListingType::Buy);

    assert!(matches_location(&listing, "NASHVILLE"));
    assert!(matches_location(&listing, "willow bend"));
    assert!(matches_location(&listing, "37203"));
    assert!(!matches_location(&listing, "memphis"));
}

#[test]
fn test_in_range_open_bounds() {
    assert!(in_range(Some(5.0), None, None));
    assert!(in_range(Some(5.0), Some(5.0), None));
    assert!(in_range(Some(5.0), None, Some(5.0)));
    assert!(!in_range(Some(5.0), Some(6.0), None));
    assert!(!in_range(Some(5.0), None, Some(4.0)));
}

#[test]
fn test_in_range_missing_value_fails_only_under_bound() {
    // No bound: a missing field is irrelevant
    assert!(in_range::<f64>(None, None, None));
    // Bound given: a missing field disqualifies the record
    assert!(!in_range(None, Some(1.0), None));
    assert!(!in_range(None, None, Some(10.0)));
}

#[test]
fn test_criteria_compose_with_and() {
    let listing = create_listing(1, 300_000.0, 3, ListingType::Buy);

    let criteria = FilterCriteria {
        location: Some("nashville".to_string()),
        listing_type: Some(ListingType::Buy),
        min_beds: Some(3),
        max_price: Some(350_000.0),
        ..Default::default()
    };
    assert!(matches_criteria(&listing, &criteria));

    // One failing predicate rejects the record regardless of the others
    let criteria = FilterCriteria {
        min_beds: Some(4),
        ..criteria
    };
    assert!(!matches_criteria(&listing, &criteria));
}

#[test]
fn test_sort_is_deterministic() {
    let listings = vec![
        create_listing(1, 300_000.0, 3, ListingType::Buy),
        create_listing(2, 250_000.0, 2, ListingType::Buy),
        create_listing(3, 300_000.0, 4, ListingType::Buy),
        create_listing(4, 275_000.0, 3, ListingType::Buy),
    ];

    let once = sort_listings(listings.clone(), SortKey::PriceAsc);
    let twice = sort_listings(once.clone(), SortKey::PriceAsc);

    assert_eq!(
        once.iter().map(|l| l.id).collect::<Vec<_>>(),
        twice.iter().map(|l| l.id).collect::<Vec<_>>()
    );
    // Equal prices keep their original relative order
    assert_eq!(once.iter().map(|l| l.id).collect::<Vec<_>>(), vec![2, 4, 1, 3]);
}

#[test]
fn test_sort_key_string_forms() {
    for key in [
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Bedrooms,
        SortKey::SquareFeet,
    ] {
        assert_eq!(SortKey::parse(key.as_str()), key);
    }
}

#[test]
fn test_urlstate_round_trip_ui_criteria() {
    let criteria = FilterCriteria {
        location: Some("lake view".to_string()),
        listing_type: Some(ListingType::Rent),
        min_price: Some(1500.0),
        max_price: Some(3200.0),
        min_beds: Some(2),
        min_baths: Some(1.5),
        property_types: vec![PropertyType::Apartment, PropertyType::Condo],
        features: vec!["Gym".to_string(), "In-Unit Laundry".to_string()],
        ..Default::default()
    };

    assert_eq!(urlstate::decode(&urlstate::encode(&criteria)), criteria);
}

#[test]
fn test_urlstate_decode_ignores_noise() {
    let criteria = urlstate::decode("?type=Buy&sort=price-low&page=3&minBeds=oops");
    assert_eq!(
        criteria,
        FilterCriteria {
            listing_type: Some(ListingType::Buy),
            ..Default::default()
        }
    );
}

#[test]
fn test_urlstate_absent_and_empty_fields_are_equivalent() {
    let empty = FilterCriteria::default();
    let blank = FilterCriteria {
        location: Some(String::new()),
        ..Default::default()
    };

    assert_eq!(urlstate::encode(&empty), urlstate::encode(&blank));
    assert_eq!(urlstate::decode(""), empty);
    assert_eq!(urlstate::decode("location="), empty);
}
