//! Nearby-pharmacy lookup.

use rxnear_catalog::PharmacyRecord;
use rxnear_geo::{find_nearby, Coordinate, ProximityResult};

use crate::error::SearchError;

/// Radius choices the locator UI offers, in kilometers.
pub const RADIUS_PRESETS_KM: [f64; 5] = [1.0, 2.0, 5.0, 10.0, 20.0];

/// Options for [`nearby_pharmacies`]. Defaults mirror the public API's:
/// 10 km radius, 20 results.
#[derive(Debug, Clone)]
pub struct NearbySearchOptions {
    pub radius_km: f64,
    /// `None` returns every pharmacy in range.
    pub limit: Option<usize>,
}

impl Default for NearbySearchOptions {
    fn default() -> Self {
        Self {
            radius_km: 10.0,
            limit: Some(20),
        }
    }
}

/// Active pharmacies within `options.radius_km` of `origin`, nearest first.
///
/// Rows without coordinates cannot be ranked; they are skipped with a debug
/// log rather than failing the whole query.
///
/// # Errors
///
/// Returns [`SearchError::Geo`] when the radius is zero, negative, or not
/// finite.
pub fn nearby_pharmacies<'a>(
    origin: Coordinate,
    options: &NearbySearchOptions,
    pharmacies: &'a [PharmacyRecord],
) -> Result<Vec<ProximityResult<&'a PharmacyRecord>>, SearchError> {
    let locatable: Vec<(&PharmacyRecord, Coordinate)> = pharmacies
        .iter()
        .filter(|pharmacy| pharmacy.active)
        .filter_map(|pharmacy| match pharmacy.location {
            Some(location) => Some((pharmacy, location)),
            None => {
                tracing::debug!(pharmacy_id = %pharmacy.id, "pharmacy has no coordinates, skipping");
                None
            }
        })
        .collect();

    let hits = find_nearby(origin, options.radius_km, locatable, |entry| entry.1)?;

    let mut results: Vec<ProximityResult<&PharmacyRecord>> = hits
        .into_iter()
        .map(|hit| ProximityResult {
            entity: hit.entity.0,
            distance_km: hit.distance_km,
        })
        .collect();
    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    tracing::debug!(
        candidates = pharmacies.len(),
        in_range = results.len(),
        radius_km = options.radius_km,
        "nearby pharmacy search complete"
    );

    Ok(results)
}
