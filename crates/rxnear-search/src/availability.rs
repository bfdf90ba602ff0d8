//! "Who has this medicine near me" search.

use chrono::NaiveDate;
use rxnear_catalog::{MedicineRecord, PharmacyRecord};
use rxnear_geo::{find_nearby, Coordinate};

use crate::error::SearchError;

/// Minimum characters a medicine query must carry after trimming; shorter
/// strings match too much of the catalog to rank usefully.
pub const MIN_QUERY_LEN: usize = 2;

/// One pharmacy's inventory, as assembled by the caller.
#[derive(Debug, Clone)]
pub struct PharmacyStock<'a> {
    pub pharmacy: &'a PharmacyRecord,
    pub medicines: &'a [MedicineRecord],
}

/// A dispensable medicine found at a pharmacy within range.
#[derive(Debug, Clone)]
pub struct MedicineMatch<'a> {
    pub pharmacy: &'a PharmacyRecord,
    pub medicine: &'a MedicineRecord,
    pub distance_km: f64,
}

/// Options for [`find_medicine_nearby`]. Defaults mirror the public API's:
/// 10 km radius, top 5 matches.
#[derive(Debug, Clone)]
pub struct MedicineSearchOptions {
    pub radius_km: f64,
    pub max_results: usize,
}

impl Default for MedicineSearchOptions {
    fn default() -> Self {
        Self {
            radius_km: 10.0,
            max_results: 5,
        }
    }
}

/// First record in `medicines` that matches `query` and can actually be
/// dispensed today. Input order is the pharmacy's own display order, so the
/// first hit is what the counter would reach for.
#[must_use]
pub fn first_dispensable_match<'a>(
    medicines: &'a [MedicineRecord],
    query: &str,
    today: NaiveDate,
) -> Option<&'a MedicineRecord> {
    medicines
        .iter()
        .find(|medicine| medicine.matches_query(query) && medicine.is_dispensable(today))
}

/// Pharmacies within range that stock a dispensable match for `query`,
/// nearest first, capped at `options.max_results`.
///
/// 1. Validate the query: at least [`MIN_QUERY_LEN`] characters after
///    trimming.
/// 2. Per pharmacy: skip inactive and unlocated rows, take the first
///    dispensable match from its inventory.
/// 3. Keep matches within `options.radius_km` of `origin` (inclusive),
///    sorted ascending by distance, truncated to `options.max_results`.
///
/// # Errors
///
/// Returns [`SearchError::QueryTooShort`] for queries under the minimum and
/// [`SearchError::Geo`] for a zero, negative, or non-finite radius.
pub fn find_medicine_nearby<'a>(
    origin: Coordinate,
    query: &str,
    today: NaiveDate,
    candidates: &[PharmacyStock<'a>],
    options: &MedicineSearchOptions,
) -> Result<Vec<MedicineMatch<'a>>, SearchError> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Err(SearchError::QueryTooShort {
            query: query.to_string(),
        });
    }

    let stocked: Vec<(&PharmacyRecord, &MedicineRecord, Coordinate)> = candidates
        .iter()
        .filter(|stock| stock.pharmacy.active)
        .filter_map(|stock| {
            let Some(location) = stock.pharmacy.location else {
                tracing::debug!(pharmacy_id = %stock.pharmacy.id, "pharmacy has no coordinates, skipping");
                return None;
            };
            first_dispensable_match(stock.medicines, trimmed, today)
                .map(|medicine| (stock.pharmacy, medicine, location))
        })
        .collect();

    let hits = find_nearby(origin, options.radius_km, stocked, |entry| entry.2)?;

    let mut matches: Vec<MedicineMatch<'a>> = hits
        .into_iter()
        .map(|hit| MedicineMatch {
            pharmacy: hit.entity.0,
            medicine: hit.entity.1,
            distance_km: hit.distance_km,
        })
        .collect();
    matches.truncate(options.max_results);

    tracing::debug!(
        query = trimmed,
        in_range = matches.len(),
        radius_km = options.radius_km,
        "medicine availability search complete"
    );

    Ok(matches)
}
