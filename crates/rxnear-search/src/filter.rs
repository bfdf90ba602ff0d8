//! In-memory catalog filtering, sorting, and grouping.
//!
//! The dashboard fetches whole inventories once and works on them locally;
//! these are the pure slice-in/Vec-out helpers behind its list views.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rxnear_catalog::{Category, MedicineRecord, PharmacyRecord};

/// Medicines matching `query` over name, brand, generic name, and
/// composition. An empty query returns everything, in input order.
#[must_use]
pub fn filter_medicines<'a>(
    medicines: &'a [MedicineRecord],
    query: &str,
) -> Vec<&'a MedicineRecord> {
    medicines
        .iter()
        .filter(|medicine| medicine.matches_query(query))
        .collect()
}

/// Pharmacies matching `query` over name, street, and city.
#[must_use]
pub fn filter_pharmacies<'a>(
    pharmacies: &'a [PharmacyRecord],
    query: &str,
) -> Vec<&'a PharmacyRecord> {
    pharmacies
        .iter()
        .filter(|pharmacy| pharmacy.matches_query(query))
        .collect()
}

#[must_use]
pub fn filter_by_category<'a>(
    medicines: &'a [MedicineRecord],
    category: Category,
) -> Vec<&'a MedicineRecord> {
    medicines
        .iter()
        .filter(|medicine| medicine.category == category)
        .collect()
}

/// Records that could be handed over the counter today.
#[must_use]
pub fn dispensable_only<'a>(
    medicines: &'a [MedicineRecord],
    today: NaiveDate,
) -> Vec<&'a MedicineRecord> {
    medicines
        .iter()
        .filter(|medicine| medicine.is_dispensable(today))
        .collect()
}

/// Sort orders the inventory table offers. Each key carries its own
/// direction: names read A to Z, quantities and prices show the biggest
/// first, expiry shows the most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicineSortKey {
    Name,
    Stock,
    Price,
    Expiry,
}

/// Stable sort by the chosen key; equal keys keep input order.
pub fn sort_medicines(medicines: &mut [&MedicineRecord], key: MedicineSortKey) {
    match key {
        MedicineSortKey::Name => {
            medicines.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        MedicineSortKey::Stock => {
            medicines.sort_by(|a, b| b.stock.current_quantity.cmp(&a.stock.current_quantity));
        }
        MedicineSortKey::Price => {
            medicines.sort_by(|a, b| b.selling_price.total_cmp(&a.selling_price));
        }
        MedicineSortKey::Expiry => {
            medicines.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date));
        }
    }
}

/// Groups a filtered list by category for the sectioned inventory view.
/// `BTreeMap` keeps section order deterministic.
#[must_use]
pub fn group_by_category<'a>(
    medicines: &[&'a MedicineRecord],
) -> BTreeMap<Category, Vec<&'a MedicineRecord>> {
    let mut groups: BTreeMap<Category, Vec<&MedicineRecord>> = BTreeMap::new();
    for &medicine in medicines {
        groups.entry(medicine.category).or_default().push(medicine);
    }
    groups
}
