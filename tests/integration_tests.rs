// Integration tests for the Haven listings service

use std::sync::Arc;

use chrono::NaiveDate;
use haven_listings::core::{search, sort_listings, urlstate, SortKey};
use haven_listings::models::{FilterCriteria, Listing, ListingType, PropertyType};
use haven_listings::services::{
    FavoriteService, JsonFileStore, KeyValueStore, ListingStore, MemoryStore, StoreError,
};

fn create_listing(
    id: u32,
    price: f64,
    bedrooms: u32,
    listing_type: ListingType,
    listed: (i32, u32, u32),
) -> Listing {
    Listing {
        id,
        address: format!("{} Falcon Ridge Road", id),
        city: "Madison".to_string(),
        state: "WI".to_string(),
        zip: "53703".to_string(),
        price,
        bedrooms,
        bathrooms: 2.0,
        square_feet: Some(1400 + id * 150),
        lot_size: Some(0.2),
        year_built: Some(2000),
        property_type: PropertyType::SingleFamilyHome,
        listing_type,
        images: vec![format!("/images/listings/{}-front.jpg", id)],
        features: vec!["Garage".to_string(), "Fireplace".to_string()],
        listed_date: NaiveDate::from_ymd_opt(listed.0, listed.1, listed.2).unwrap(),
    }
}

fn sample_store() -> ListingStore {
    ListingStore::new(vec![
        create_listing(1, 500_000.0, 3, ListingType::Buy, (2024, 3, 1)),
        create_listing(2, 300_000.0, 2, ListingType::Rent, (2024, 5, 1)),
        create_listing(3, 420_000.0, 4, ListingType::Buy, (2024, 4, 1)),
    ])
}

#[test]
fn test_empty_criteria_return_store_unchanged() {
    let store = sample_store();
    let results = search(store.all(), &FilterCriteria::default());

    let ids: Vec<u32> = results.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_unsatisfiable_price_floor_yields_empty() {
    let store = sample_store();
    let criteria = FilterCriteria {
        min_price: Some(10_000_000.0),
        ..Default::default()
    };

    assert!(search(store.all(), &criteria).is_empty());
}

#[test]
fn test_listing_type_and_min_price_scenario() {
    let store = ListingStore::new(vec![
        create_listing(1, 500_000.0, 3, ListingType::Buy, (2024, 1, 1)),
        create_listing(2, 300_000.0, 2, ListingType::Rent, (2024, 1, 2)),
    ]);

    let criteria = FilterCriteria {
        listing_type: Some(ListingType::Buy),
        min_price: Some(400_000.0),
        ..Default::default()
    };

    let results = search(store.all(), &criteria);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);
}

#[test]
fn test_conjunctive_features_exclude_partial_matches() {
    let mut listing = create_listing(1, 500_000.0, 3, ListingType::Buy, (2024, 1, 1));
    listing.features = vec!["Pool".to_string(), "Garage".to_string()];
    let store = ListingStore::new(vec![listing]);

    let criteria = FilterCriteria {
        features: vec!["Pool".to_string(), "Fireplace".to_string()],
        ..Default::default()
    };

    assert!(search(store.all(), &criteria).is_empty());
}

#[test]
fn test_toggle_twice_restores_membership() {
    let favorites = FavoriteService::load(Arc::new(MemoryStore::new()));

    let before = favorites.is_favorite(1);
    favorites.toggle(1).unwrap();
    favorites.toggle(1).unwrap();

    assert_eq!(favorites.is_favorite(1), before);
}

#[test]
fn test_favorites_join_drops_dangling_ids() {
    let store = sample_store();
    let favorites = FavoriteService::load(Arc::new(MemoryStore::new()));

    favorites.toggle(2).unwrap();
    favorites.toggle(5).unwrap();

    let joined = favorites.list_favorites(&store);
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].listing.id, 2);
    assert!(joined[0].is_favorite);
}

#[test]
fn test_get_by_unknown_id_is_not_found_and_leaves_favorites_alone() {
    let store = sample_store();
    let favorites = FavoriteService::load(Arc::new(MemoryStore::new()));
    favorites.toggle(1).unwrap();
    let before = favorites.ids();

    assert!(matches!(store.get(999), Err(StoreError::NotFound(999))));
    assert_eq!(favorites.ids(), before);
}

#[test]
fn test_corrupt_favorites_file_recovers_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStore::open(dir.path()).unwrap();
    storage.write("favorite_listings", "not json at all").unwrap();

    let storage: Arc<dyn KeyValueStore> = Arc::new(storage);
    let favorites = FavoriteService::load(storage.clone());
    assert!(favorites.ids().is_empty());

    // The next toggle writes a clean payload that survives a reload
    favorites.toggle(3).unwrap();
    let rehydrated = FavoriteService::load(storage);
    assert!(rehydrated.is_favorite(3));
}

#[test]
fn test_end_to_end_search_cycle() {
    // URL in, annotated ordered listings out - the full search page cycle
    let store = sample_store();
    let favorites = FavoriteService::load(Arc::new(MemoryStore::new()));
    favorites.toggle(3).unwrap();

    let criteria = urlstate::decode("type=Buy&minPrice=100000");
    let results = search(store.all(), &criteria);
    let results = sort_listings(results, SortKey::parse("price-low"));
    let annotated = favorites.annotate_all(results);

    let ids: Vec<u32> = annotated.iter().map(|l| l.listing.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert!(annotated[0].is_favorite);
    assert!(!annotated[1].is_favorite);

    // Re-encoding the decoded criteria loses nothing
    assert_eq!(urlstate::decode(&urlstate::encode(&criteria)), criteria);
}

#[test]
fn test_newest_first_ordering() {
    let store = sample_store();
    let results = sort_listings(search(store.all(), &FilterCriteria::default()), SortKey::Newest);

    let ids: Vec<u32> = results.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}
