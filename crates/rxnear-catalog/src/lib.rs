//! Medicine and pharmacy catalog domain for RxNear.
//!
//! Strict record types for the catalog and directory services, the
//! stock/expiry availability classifier, and normalization of the observed
//! upstream JSON shapes into those strict types. All functions are pure and
//! synchronous; "today" and "now" are always explicit parameters, never read
//! from a clock.

pub mod category;
pub mod error;
pub mod hours;
pub mod medicine;
pub mod normalize;
pub mod pharmacy;
pub mod raw;
pub mod status;
pub mod stock;

pub use category::Category;
pub use error::CatalogError;
pub use hours::{DaySchedule, OperatingHours};
pub use medicine::MedicineRecord;
pub use normalize::{
    medicine_from_json, normalize_medicine, normalize_pharmacy, pharmacy_from_json,
};
pub use pharmacy::{Address, ContactInfo, PharmacyRecord, PharmacyService, Rating};
pub use status::{classify, classify_with_policy, AvailabilityPolicy, AvailabilityStatus};
pub use stock::{StockInfo, DEFAULT_MINIMUM_THRESHOLD};
