//! Great-circle distance on a spherical Earth.
//!
//! Haversine is accurate to roughly 0.5% against the true ellipsoid, which is
//! far tighter than "which pharmacy is closest" needs at city scale.

use crate::coordinate::Coordinate;

/// Mean Earth radius in kilometers (spherical approximation).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
///
/// Returns the unrounded value. This is the canonical distance: radius checks
/// and sorting must use it so that filtering can never disagree with the
/// underlying math. Use [`distance_km_display`] when presenting to people.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    // Floating error can push h a hair past 1.0 for near-antipodal pairs.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// [`distance_km`] rounded to one decimal place, for display.
#[must_use]
pub fn distance_km_display(a: Coordinate, b: Coordinate) -> f64 {
    (distance_km(a, b) * 10.0).round() / 10.0
}
