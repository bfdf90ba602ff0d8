//! Raw wire shapes from the catalog and directory services.
//!
//! These mirror observed payloads, not aspirational ones. Field names drift
//! between deployments (`_id` vs `id`, `expiryDate` vs `expiry_date`,
//! `price` vs `sellingPrice`), `stock` arrives as a bare count on legacy rows
//! and a structured object on current ones, `rating` is a number or an
//! object or null, and coordinates come GeoJSON style as
//! `[longitude, latitude]`. Everything here is tolerant; strictness lives in
//! [`crate::normalize`].

use serde::Deserialize;

fn default_active() -> bool {
    true
}

/// Stock as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawStock {
    /// Legacy flat count, e.g. `"stock": 25`.
    Count(i64),
    /// Current structured form.
    Detailed {
        #[serde(alias = "currentQuantity", alias = "quantity")]
        current_quantity: i64,
        /// Absent on rows written before thresholds existed.
        #[serde(default, alias = "minimumThreshold", alias = "minStockLevel")]
        minimum_threshold: Option<i64>,
        #[serde(default)]
        unit: Option<String>,
    },
}

/// Rating as it appears on the wire: a bare mean score on old rows, a
/// `{ average, count }` object on current ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRating {
    Score(f64),
    Detailed {
        average: f64,
        #[serde(default)]
        count: u32,
    },
}

/// GeoJSON Point as the directory stores it. `coordinates` is
/// `[longitude, latitude]`; getting that backwards puts every pharmacy in
/// the ocean, so the swap into lat/lon order is owned by normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeoPoint {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMedicine {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "genericName")]
    pub generic_name: Option<String>,
    pub brand: String,
    pub composition: String,
    /// Free string on the wire; the catalog's closed set is enforced during
    /// normalization so the error can name the offending record.
    pub category: String,
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default, alias = "packSize")]
    pub pack_size: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default, alias = "batchNumber")]
    pub batch_number: Option<String>,
    /// `YYYY-MM-DD`, or a full RFC 3339 timestamp on bulk-imported rows.
    #[serde(default, alias = "manufacturingDate")]
    pub manufacturing_date: Option<String>,
    #[serde(alias = "expiryDate")]
    pub expiry_date: String,
    #[serde(default)]
    pub mrp: Option<f64>,
    #[serde(alias = "sellingPrice", alias = "price")]
    pub selling_price: f64,
    #[serde(
        default,
        alias = "prescriptionRequired",
        alias = "requiresPrescription"
    )]
    pub prescription_required: bool,
    pub stock: RawStock,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_active", alias = "isActive")]
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAddress {
    #[serde(default)]
    pub street: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// One weekday's hours. Times are `"HH:MM"` strings on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDaySchedule {
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default, alias = "is24Hours")]
    pub is_24_hours: bool,
    #[serde(default, alias = "isClosed")]
    pub is_closed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHours {
    #[serde(default)]
    pub monday: Option<RawDaySchedule>,
    #[serde(default)]
    pub tuesday: Option<RawDaySchedule>,
    #[serde(default)]
    pub wednesday: Option<RawDaySchedule>,
    #[serde(default)]
    pub thursday: Option<RawDaySchedule>,
    #[serde(default)]
    pub friday: Option<RawDaySchedule>,
    #[serde(default)]
    pub saturday: Option<RawDaySchedule>,
    #[serde(default)]
    pub sunday: Option<RawDaySchedule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPharmacy {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "licenseNumber")]
    pub license_number: Option<String>,
    /// Absent on rows that predate geocoding.
    #[serde(default)]
    pub location: Option<RawGeoPoint>,
    pub address: RawAddress,
    pub phone: String,
    #[serde(default, alias = "alternatePhone")]
    pub alternate_phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "operatingHours", alias = "hours")]
    pub operating_hours: Option<RawHours>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default, alias = "ratings")]
    pub rating: Option<RawRating>,
    #[serde(default, alias = "isVerified")]
    pub verified: bool,
    #[serde(default = "default_active", alias = "isActive")]
    pub active: bool,
}
