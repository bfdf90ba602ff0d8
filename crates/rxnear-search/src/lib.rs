//! Search surface for RxNear.
//!
//! Composes the geo and catalog crates into the operations the apps call:
//! nearby-pharmacy lookup, "who has this medicine near me", in-memory
//! catalog filtering and sorting, and inventory summaries for the pharmacist
//! dashboard. Every operation takes explicit origins, clocks, and option
//! structs; nothing here touches the network or the system time.

pub mod availability;
pub mod error;
pub mod filter;
pub mod nearby;
pub mod stats;

pub use availability::{
    find_medicine_nearby, first_dispensable_match, MedicineMatch, MedicineSearchOptions,
    PharmacyStock, MIN_QUERY_LEN,
};
pub use error::SearchError;
pub use filter::{
    dispensable_only, filter_by_category, filter_medicines, filter_pharmacies, group_by_category,
    sort_medicines, MedicineSortKey,
};
pub use nearby::{nearby_pharmacies, NearbySearchOptions, RADIUS_PRESETS_KM};
pub use stats::{
    expiry_alerts, restock_alerts, summarize_inventory, InventorySummary, SummaryOptions,
};
