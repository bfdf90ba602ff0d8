//! Radius filtering and distance ranking for located entities.

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::distance::distance_km;
use crate::error::GeoError;

/// An entity paired with its distance from a search origin.
///
/// Transient: built fresh per search call, never cached across calls.
/// `distance_km` is the canonical unrounded value.
#[derive(Debug, Clone, Serialize)]
pub struct ProximityResult<T> {
    pub entity: T,
    pub distance_km: f64,
}

/// Filters `candidates` to those within `radius_km` of `origin`, nearest
/// first.
///
/// `locate` extracts each candidate's position. The radius check is inclusive
/// (`distance <= radius_km`) and the sort is stable, so candidates at exactly
/// the radius are kept and equidistant candidates keep their input order.
/// Empty input yields an empty vec, not an error.
///
/// # Errors
///
/// Returns [`GeoError::InvalidRadius`] when `radius_km` is zero, negative,
/// or not finite.
pub fn find_nearby<T, F>(
    origin: Coordinate,
    radius_km: f64,
    candidates: impl IntoIterator<Item = T>,
    locate: F,
) -> Result<Vec<ProximityResult<T>>, GeoError>
where
    F: Fn(&T) -> Coordinate,
{
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(GeoError::InvalidRadius { radius_km });
    }

    let mut results: Vec<ProximityResult<T>> = candidates
        .into_iter()
        .filter_map(|entity| {
            let d = distance_km(origin, locate(&entity));
            (d <= radius_km).then_some(ProximityResult {
                entity,
                distance_km: d,
            })
        })
        .collect();

    results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    Ok(results)
}
