//! Geospatial primitives for RxNear.
//!
//! Validated WGS-84 coordinates, great-circle (haversine) distance, and a
//! radius filter that pairs arbitrary entities with their distance from a
//! search origin. Everything here is pure and synchronous: no clocks, no I/O,
//! no shared state, safe to call from any number of threads.

pub mod coordinate;
pub mod distance;
pub mod error;
pub mod nearby;

pub use coordinate::Coordinate;
pub use distance::{distance_km, distance_km_display, EARTH_RADIUS_KM};
pub use error::GeoError;
pub use nearby::{find_nearby, ProximityResult};
