//! End-to-end flow over the public API: raw upstream JSON through
//! normalization, proximity search, medicine availability, and the
//! dashboard summaries. No network and no clock; "today" is pinned.

use chrono::NaiveDate;
use rxnear_catalog::{
    classify, medicine_from_json, pharmacy_from_json, AvailabilityStatus, MedicineRecord,
    PharmacyRecord,
};
use rxnear_geo::Coordinate;
use rxnear_search::{
    expiry_alerts, find_medicine_nearby, nearby_pharmacies, restock_alerts, summarize_inventory,
    MedicineSearchOptions, NearbySearchOptions, PharmacyStock, SummaryOptions,
};
use serde_json::json;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn origin() -> Coordinate {
    // Jaipur city centre.
    Coordinate::new(26.9124, 75.7873).unwrap()
}

/// Directory rows as the upstream service actually sends them: Mongo `_id`,
/// camelCase keys, GeoJSON `[longitude, latitude]` points.
fn pharmacy_fixtures() -> Vec<PharmacyRecord> {
    let payloads = vec![
        json!({
            "_id": "ph-001",
            "name": "MedPlus Raja Park",
            "licenseNumber": "RJ-PH-4471",
            "location": { "type": "Point", "coordinates": [75.7873, 26.9304] },
            "address": {
                "street": "12 Govind Marg",
                "city": "Jaipur",
                "state": "Rajasthan",
                "pincode": "302004"
            },
            "phone": "9876543210",
            "operatingHours": {
                "monday": { "open": "09:00", "close": "21:30" },
                "sunday": { "is24Hours": true }
            },
            "services": ["home_delivery", "24_hours"],
            "ratings": { "average": 4.3, "count": 212 },
            "isVerified": true,
            "isActive": true
        }),
        json!({
            "_id": "ph-002",
            "name": "Sharma Medicals",
            "location": { "type": "Point", "coordinates": [75.7873, 26.9664] },
            "address": {
                "city": "Jaipur",
                "state": "Rajasthan",
                "pincode": "302012"
            },
            "phone": "9812345678",
            "ratings": 4.0
        }),
        json!({
            "_id": "ph-003",
            "name": "Apollo Pharmacy Chomu",
            "location": { "type": "Point", "coordinates": [75.7873, 27.1374] },
            "address": {
                "city": "Chomu",
                "state": "Rajasthan",
                "pincode": "303702"
            },
            "phone": "9898989898"
        }),
        json!({
            "_id": "ph-004",
            "name": "Gupta Medical Store",
            "address": {
                "city": "Jaipur",
                "state": "Rajasthan",
                "pincode": "302001"
            },
            "phone": "9811111111"
        }),
    ];
    payloads
        .into_iter()
        .map(|payload| pharmacy_from_json(&payload.to_string()).unwrap())
        .collect()
}

/// MedPlus inventory: one record per availability bucket, mixing current
/// structured stock with legacy bare counts and `price` for `sellingPrice`.
fn medplus_inventory() -> Vec<MedicineRecord> {
    let payloads = vec![
        json!({
            "_id": "med-a1",
            "name": "Calpol 500",
            "brand": "GSK",
            "composition": "Paracetamol 500mg",
            "category": "tablet",
            "expiryDate": "2026-01-31",
            "sellingPrice": 32.5,
            "stock": { "currentQuantity": 40, "minStockLevel": 10, "unit": "strips" }
        }),
        json!({
            "_id": "med-a2",
            "name": "Azithral 250",
            "brand": "Alembic",
            "composition": "Azithromycin 250mg",
            "category": "tablet",
            "expiryDate": "2026-03-31T00:00:00Z",
            "price": 89.0,
            "prescriptionRequired": true,
            "stock": 4
        }),
        json!({
            "_id": "med-a3",
            "name": "Benadryl",
            "brand": "Kenvue",
            "composition": "Diphenhydramine",
            "category": "syrup",
            "expiryDate": "2026-05-31",
            "sellingPrice": 110.0,
            "stock": { "quantity": 0, "unit": "bottles" }
        }),
        json!({
            "_id": "med-a4",
            "name": "Volini Gel",
            "brand": "Sun Pharma",
            "composition": "Diclofenac",
            "category": "gel",
            "expiryDate": "2024-06-29",
            "sellingPrice": 145.0,
            "stock": { "currentQuantity": 30, "minStockLevel": 5 }
        }),
        json!({
            "_id": "med-a5",
            "name": "Old Crocin",
            "brand": "GSK",
            "composition": "Paracetamol 650mg",
            "category": "tablet",
            "expiryDate": "2024-01-01",
            "sellingPrice": 28.0,
            "stock": { "currentQuantity": 20, "minStockLevel": 10 }
        }),
    ];
    payloads
        .into_iter()
        .map(|payload| medicine_from_json(&payload.to_string()).unwrap())
        .collect()
}

fn sharma_inventory() -> Vec<MedicineRecord> {
    let payloads = vec![
        json!({
            "_id": "med-b1",
            "name": "Dolo 650",
            "brand": "Micro Labs",
            "composition": "Paracetamol 650mg",
            "category": "tablet",
            "expiryDate": "2026-02-28",
            "sellingPrice": 30.0,
            "stock": 0
        }),
        json!({
            "_id": "med-b2",
            "name": "Paracip 500",
            "brand": "Cipla",
            "composition": "Paracetamol 500mg",
            "category": "tablet",
            "expiryDate": "2025-12-31",
            "sellingPrice": 24.0,
            "stock": { "currentQuantity": 25 }
        }),
    ];
    payloads
        .into_iter()
        .map(|payload| medicine_from_json(&payload.to_string()).unwrap())
        .collect()
}

fn apollo_inventory() -> Vec<MedicineRecord> {
    let payload = json!({
        "_id": "med-c1",
        "name": "Calpol 650",
        "brand": "GSK",
        "composition": "Paracetamol 650mg",
        "category": "tablet",
        "expiryDate": "2026-04-30",
        "sellingPrice": 36.0,
        "stock": { "currentQuantity": 50 }
    });
    vec![medicine_from_json(&payload.to_string()).unwrap()]
}

#[test]
fn normalization_swaps_geojson_order_and_fills_defaults() {
    let pharmacies = pharmacy_fixtures();
    let medplus = &pharmacies[0];
    let location = medplus.location.unwrap();
    assert!((location.lat() - 26.9304).abs() < 1e-9);
    assert!((location.lon() - 75.7873).abs() < 1e-9);
    assert_eq!(medplus.address.country, "India");

    // Bare rating score carries no review count.
    let sharma_rating = pharmacies[1].rating.as_ref().unwrap();
    assert!((sharma_rating.average - 4.0).abs() < f64::EPSILON);
    assert_eq!(sharma_rating.count, 0);

    // Legacy bare-count stock gets the default threshold and unit.
    let azithral = &medplus_inventory()[1];
    assert_eq!(azithral.stock.current_quantity, 4);
    assert_eq!(azithral.stock.minimum_threshold, 10);
    assert_eq!(azithral.stock.unit, "pieces");
    assert!((azithral.selling_price - 89.0).abs() < f64::EPSILON);
}

#[test]
fn nearby_search_ranks_located_active_stores() {
    let pharmacies = pharmacy_fixtures();
    let results =
        nearby_pharmacies(origin(), &NearbySearchOptions::default(), &pharmacies).unwrap();

    // ph-003 is ~25 km out, ph-004 has no coordinates; the two city stores
    // come back nearest first.
    let ids: Vec<&str> = results.iter().map(|r| r.entity.id.as_str()).collect();
    assert_eq!(ids, ["ph-001", "ph-002"]);
    assert!(results[0].distance_km < results[1].distance_km);
    assert!((results[0].distance_km - 2.0).abs() < 0.1);
    assert!((results[1].distance_km - 6.0).abs() < 0.1);
}

#[test]
fn medicine_search_returns_dispensable_matches_nearest_first() {
    let pharmacies = pharmacy_fixtures();
    let medplus = medplus_inventory();
    let sharma = sharma_inventory();
    let apollo = apollo_inventory();
    let candidates = vec![
        PharmacyStock {
            pharmacy: &pharmacies[0],
            medicines: &medplus,
        },
        PharmacyStock {
            pharmacy: &pharmacies[1],
            medicines: &sharma,
        },
        PharmacyStock {
            pharmacy: &pharmacies[2],
            medicines: &apollo,
        },
    ];

    let matches = find_medicine_nearby(
        origin(),
        "paracetamol",
        today(),
        &candidates,
        &MedicineSearchOptions::default(),
    )
    .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].pharmacy.id, "ph-001");
    assert_eq!(matches[0].medicine.name, "Calpol 500");
    // Dolo 650 matches the query but is depleted; the search must step past
    // it to Sharma's dispensable Paracip.
    assert_eq!(matches[1].pharmacy.id, "ph-002");
    assert_eq!(matches[1].medicine.name, "Paracip 500");
    assert!(matches[0].distance_km < matches[1].distance_km);
    assert_eq!(
        classify(&matches[0].medicine.stock, matches[0].medicine.expiry_date, today()),
        AvailabilityStatus::Available
    );
}

#[test]
fn dashboard_summary_and_alerts_from_normalized_inventory() {
    let inventory = medplus_inventory();
    let options = SummaryOptions::default();

    let summary = summarize_inventory(&inventory, today(), &options);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.available, 1);
    assert_eq!(summary.low_stock, 1);
    assert_eq!(summary.out_of_stock, 1);
    assert_eq!(summary.expiring_soon, 1);
    assert_eq!(summary.expired, 1);

    let restock = restock_alerts(&inventory, &options);
    let restock_ids: Vec<&str> = restock.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(restock_ids, ["med-a2", "med-a3"]);

    let expiring = expiry_alerts(&inventory, today(), &options);
    let expiring_ids: Vec<&str> = expiring.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(expiring_ids, ["med-a4"]);
}
