use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a listing is offered for sale, for rent, or already sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingType {
    Buy,
    Rent,
    Sold,
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListingType::Buy => "Buy",
            ListingType::Rent => "Rent",
            ListingType::Sold => "Sold",
        };
        f.write_str(s)
    }
}

impl FromStr for ListingType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(ListingType::Buy),
            "rent" => Ok(ListingType::Rent),
            "sold" => Ok(ListingType::Sold),
            _ => Err(()),
        }
    }
}

/// Category of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "Single Family Home")]
    SingleFamilyHome,
    Townhome,
    Condo,
    Apartment,
    #[serde(rename = "Multi-Family")]
    MultiFamily,
    Land,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamilyHome => "Single Family Home",
            PropertyType::Townhome => "Townhome",
            PropertyType::Condo => "Condo",
            PropertyType::Apartment => "Apartment",
            PropertyType::MultiFamily => "Multi-Family",
            PropertyType::Land => "Land",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single Family Home" => Ok(PropertyType::SingleFamilyHome),
            "Townhome" => Ok(PropertyType::Townhome),
            "Condo" => Ok(PropertyType::Condo),
            "Apartment" => Ok(PropertyType::Apartment),
            "Multi-Family" => Ok(PropertyType::MultiFamily),
            "Land" => Ok(PropertyType::Land),
            _ => Err(()),
        }
    }
}

/// A property listing from the catalog fixture
///
/// Records are immutable at runtime; the store is loaded once at startup
/// and never written back. `price` is the monthly rent for rentals and the
/// asking price otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(alias = "Id")]
    pub id: u32,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zipCode")]
    pub zip: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    #[serde(rename = "squareFeet", default)]
    pub square_feet: Option<u32>,
    #[serde(rename = "lotSize", default)]
    pub lot_size: Option<f64>,
    #[serde(rename = "yearBuilt", default)]
    pub year_built: Option<i32>,
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    #[serde(rename = "listingType")]
    pub listing_type: ListingType,
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(rename = "listedDate")]
    pub listed_date: NaiveDate,
}

/// A listing joined with its current favorite status
///
/// Computed at query time, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedListing {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

/// User-specified search constraints
///
/// Every field is optional; an absent or empty field imposes no constraint.
/// Out-of-order bounds (min > max) are legal and simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "listingType", default)]
    pub listing_type: Option<ListingType>,
    #[serde(rename = "minPrice", default)]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice", default)]
    pub max_price: Option<f64>,
    #[serde(rename = "minBeds", default)]
    pub min_beds: Option<u32>,
    #[serde(rename = "minBaths", default)]
    pub min_baths: Option<f64>,
    #[serde(rename = "propertyTypes", default)]
    pub property_types: Vec<PropertyType>,
    #[serde(rename = "minSquareFeet", default)]
    pub min_square_feet: Option<u32>,
    #[serde(rename = "maxSquareFeet", default)]
    pub max_square_feet: Option<u32>,
    #[serde(rename = "minLotSize", default)]
    pub min_lot_size: Option<f64>,
    #[serde(rename = "maxLotSize", default)]
    pub max_lot_size: Option<f64>,
    #[serde(rename = "minYearBuilt", default)]
    pub min_year_built: Option<i32>,
    #[serde(rename = "maxYearBuilt", default)]
    pub max_year_built: Option<i32>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl FilterCriteria {
    /// True when no field imposes any constraint
    pub fn is_empty(&self) -> bool {
        self.location.as_deref().map_or(true, str::is_empty)
            && self.listing_type.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_beds.is_none()
            && self.min_baths.is_none()
            && self.property_types.is_empty()
            && self.min_square_feet.is_none()
            && self.max_square_feet.is_none()
            && self.min_lot_size.is_none()
            && self.max_lot_size.is_none()
            && self.min_year_built.is_none()
            && self.max_year_built.is_none()
            && self.features.is_empty()
    }
}

/// Lifecycle of a scheduled tour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// In-person or virtual visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourType {
    #[serde(rename = "In-Person")]
    InPerson,
    Virtual,
}

/// A scheduled property tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: u32,
    #[serde(rename = "listingId")]
    pub listing_id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub date: NaiveDate,
    /// Start of the slot as entered by the visitor, e.g. "09:00"
    #[serde(rename = "timeSlot")]
    pub time_slot: String,
    #[serde(rename = "tourType")]
    pub tour_type: TourType,
    #[serde(rename = "specialRequests", default)]
    pub special_requests: Option<String>,
    pub status: TourStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Tour {
    /// Naive start instant, used to order and filter upcoming tours
    ///
    /// Slots that fail to parse as HH:MM sort at the start of their day.
    pub fn starts_at(&self) -> NaiveDateTime {
        let time = NaiveTime::parse_from_str(&self.time_slot, "%H:%M").unwrap_or(NaiveTime::MIN);
        self.date.and_time(time)
    }
}

/// Lifecycle of an agent contact request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    Pending,
    Responded,
    Closed,
}

/// A request to be contacted by the listing agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: u32,
    #[serde(rename = "listingId")]
    pub listing_id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
