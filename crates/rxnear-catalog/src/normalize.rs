//! Conversion from observed wire shapes to strict domain records.
//!
//! Fail-loud: anything the strict types cannot represent (negative
//! quantities, unknown categories, unparseable dates, malformed GeoJSON)
//! becomes [`CatalogError::InvalidRecord`] naming the offending record and
//! the reason. Nothing is clamped or defaulted into validity.

use chrono::{NaiveDate, NaiveTime};
use rxnear_geo::Coordinate;

use crate::category::Category;
use crate::error::CatalogError;
use crate::hours::{DaySchedule, OperatingHours};
use crate::medicine::MedicineRecord;
use crate::pharmacy::{Address, ContactInfo, PharmacyRecord, PharmacyService, Rating};
use crate::raw::{
    RawAddress, RawDaySchedule, RawGeoPoint, RawHours, RawMedicine, RawPharmacy, RawRating,
    RawStock,
};
use crate::stock::{StockInfo, DEFAULT_MINIMUM_THRESHOLD};

/// Parses and normalizes one catalog-service medicine payload.
///
/// # Errors
///
/// Returns [`CatalogError::Deserialize`] when the JSON does not match the
/// observed shape at all, and [`CatalogError::InvalidRecord`] when it does
/// but the contents are impossible.
pub fn medicine_from_json(json: &str) -> Result<MedicineRecord, CatalogError> {
    let raw: RawMedicine =
        serde_json::from_str(json).map_err(|source| CatalogError::Deserialize {
            context: "medicine record".to_string(),
            source,
        })?;
    normalize_medicine(raw)
}

/// Parses and normalizes one directory-service pharmacy payload.
///
/// # Errors
///
/// Same split as [`medicine_from_json`].
pub fn pharmacy_from_json(json: &str) -> Result<PharmacyRecord, CatalogError> {
    let raw: RawPharmacy =
        serde_json::from_str(json).map_err(|source| CatalogError::Deserialize {
            context: "pharmacy record".to_string(),
            source,
        })?;
    normalize_pharmacy(raw)
}

/// Normalizes a raw catalog medicine into a [`MedicineRecord`].
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRecord`] for an empty name, an unknown
/// category, unparseable or inconsistent dates, negative quantities, or
/// negative prices.
pub fn normalize_medicine(raw: RawMedicine) -> Result<MedicineRecord, CatalogError> {
    if raw.name.trim().is_empty() {
        return Err(invalid(&raw.id, "medicine name must be non-empty"));
    }

    let expiry_date = parse_date(&raw.expiry_date).map_err(|reason| invalid(&raw.id, reason))?;
    let manufacturing_date = match raw.manufacturing_date.as_deref() {
        Some(value) => Some(parse_date(value).map_err(|reason| invalid(&raw.id, reason))?),
        None => None,
    };
    if let Some(made) = manufacturing_date {
        if expiry_date <= made {
            return Err(invalid(
                &raw.id,
                format!("expiry date {expiry_date} is not after manufacturing date {made}"),
            ));
        }
    }

    let category = Category::from_name(&raw.category)
        .ok_or_else(|| invalid(&raw.id, format!("unknown category \"{}\"", raw.category)))?;

    let stock = normalize_stock(raw.stock).map_err(|reason| invalid(&raw.id, reason))?;

    if !raw.selling_price.is_finite() || raw.selling_price < 0.0 {
        return Err(invalid(
            &raw.id,
            format!("invalid selling price {}", raw.selling_price),
        ));
    }
    if let Some(mrp) = raw.mrp {
        if !mrp.is_finite() || mrp < 0.0 {
            return Err(invalid(&raw.id, format!("invalid mrp {mrp}")));
        }
    }

    Ok(MedicineRecord {
        id: raw.id,
        name: raw.name,
        generic_name: non_empty(raw.generic_name),
        brand: raw.brand,
        composition: raw.composition,
        category,
        strength: non_empty(raw.strength),
        pack_size: non_empty(raw.pack_size),
        manufacturer: non_empty(raw.manufacturer),
        batch_number: non_empty(raw.batch_number),
        manufacturing_date,
        expiry_date,
        mrp: raw.mrp,
        selling_price: raw.selling_price,
        prescription_required: raw.prescription_required,
        stock,
        description: non_empty(raw.description),
        tags: raw.tags,
        active: raw.active,
    })
}

/// Normalizes a raw directory pharmacy into a [`PharmacyRecord`].
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRecord`] for an empty name, malformed
/// GeoJSON or out-of-range coordinates, a bad pincode or phone number,
/// unknown service tags, out-of-range ratings, or unparseable times.
pub fn normalize_pharmacy(raw: RawPharmacy) -> Result<PharmacyRecord, CatalogError> {
    if raw.name.trim().is_empty() {
        return Err(invalid(&raw.id, "pharmacy name must be non-empty"));
    }

    let location = match &raw.location {
        Some(point) => Some(normalize_geo_point(&raw.id, point)?),
        None => None,
    };

    let address = normalize_address(&raw.id, raw.address)?;
    let phone = normalize_phone(&raw.id, &raw.phone)?;
    let alternate_phone = match non_empty(raw.alternate_phone) {
        Some(value) => Some(normalize_phone(&raw.id, &value)?),
        None => None,
    };

    let hours = match raw.operating_hours {
        Some(raw_hours) => normalize_hours(&raw.id, raw_hours)?,
        None => OperatingHours::default(),
    };

    let services = raw
        .services
        .iter()
        .map(|name| {
            PharmacyService::from_name(name)
                .ok_or_else(|| invalid(&raw.id, format!("unknown service \"{name}\"")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rating = match raw.rating {
        Some(raw_rating) => Some(normalize_rating(&raw.id, raw_rating)?),
        None => None,
    };

    Ok(PharmacyRecord {
        id: raw.id,
        name: raw.name,
        license_number: non_empty(raw.license_number),
        location,
        address,
        contact: ContactInfo {
            phone,
            alternate_phone,
            email: non_empty(raw.email),
        },
        hours,
        services,
        rating,
        verified: raw.verified,
        active: raw.active,
    })
}

fn normalize_stock(raw: RawStock) -> Result<StockInfo, String> {
    match raw {
        RawStock::Count(count) => {
            let quantity =
                u32::try_from(count).map_err(|_| format!("stock count {count} is out of range"))?;
            Ok(StockInfo::from_bare_count(quantity))
        }
        RawStock::Detailed {
            current_quantity,
            minimum_threshold,
            unit,
        } => {
            let current_quantity = u32::try_from(current_quantity)
                .map_err(|_| format!("stock quantity {current_quantity} is out of range"))?;
            let minimum_threshold = match minimum_threshold {
                Some(value) => u32::try_from(value)
                    .map_err(|_| format!("stock threshold {value} is out of range"))?,
                None => DEFAULT_MINIMUM_THRESHOLD,
            };
            Ok(StockInfo {
                current_quantity,
                minimum_threshold,
                unit: non_empty(unit).unwrap_or_else(|| "pieces".to_string()),
            })
        }
    }
}

fn normalize_geo_point(id: &str, point: &RawGeoPoint) -> Result<Coordinate, CatalogError> {
    if let Some(kind) = point.kind.as_deref() {
        if !kind.eq_ignore_ascii_case("point") {
            return Err(invalid(id, format!("unsupported geometry type \"{kind}\"")));
        }
    }
    // GeoJSON order: [longitude, latitude].
    let [lon, lat] = point.coordinates[..] else {
        return Err(invalid(
            id,
            format!(
                "GeoJSON point needs exactly 2 coordinates, got {}",
                point.coordinates.len()
            ),
        ));
    };
    Coordinate::new(lat, lon).map_err(|err| invalid(id, err.to_string()))
}

fn normalize_address(id: &str, raw: RawAddress) -> Result<Address, CatalogError> {
    if raw.city.trim().is_empty() || raw.state.trim().is_empty() {
        return Err(invalid(id, "address must carry a city and state"));
    }
    let pincode = raw.pincode.trim().to_string();
    if pincode.len() != 6 || !pincode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            id,
            format!("pincode \"{}\" must be exactly 6 digits", raw.pincode),
        ));
    }
    Ok(Address {
        street: non_empty(raw.street),
        city: raw.city,
        state: raw.state,
        pincode,
        country: non_empty(raw.country).unwrap_or_else(|| "India".to_string()),
    })
}

fn normalize_phone(id: &str, value: &str) -> Result<String, CatalogError> {
    let digits = value.trim();
    if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            id,
            format!("phone \"{value}\" must be exactly 10 digits"),
        ));
    }
    Ok(digits.to_string())
}

fn normalize_hours(id: &str, raw: RawHours) -> Result<OperatingHours, CatalogError> {
    Ok(OperatingHours {
        monday: normalize_day(id, raw.monday)?,
        tuesday: normalize_day(id, raw.tuesday)?,
        wednesday: normalize_day(id, raw.wednesday)?,
        thursday: normalize_day(id, raw.thursday)?,
        friday: normalize_day(id, raw.friday)?,
        saturday: normalize_day(id, raw.saturday)?,
        sunday: normalize_day(id, raw.sunday)?,
    })
}

fn normalize_day(
    id: &str,
    raw: Option<RawDaySchedule>,
) -> Result<Option<DaySchedule>, CatalogError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    Ok(Some(DaySchedule {
        open: parse_time(id, raw.open.as_deref())?,
        close: parse_time(id, raw.close.as_deref())?,
        is_24_hours: raw.is_24_hours,
        is_closed: raw.is_closed,
    }))
}

fn parse_time(id: &str, value: Option<&str>) -> Result<Option<NaiveTime>, CatalogError> {
    let Some(value) = value else {
        return Ok(None);
    };
    NaiveTime::parse_from_str(value, "%H:%M")
        .map(Some)
        .map_err(|_| invalid(id, format!("unparseable time \"{value}\" (expected HH:MM)")))
}

fn normalize_rating(id: &str, raw: RawRating) -> Result<Rating, CatalogError> {
    let (average, count) = match raw {
        RawRating::Score(average) => (average, 0),
        RawRating::Detailed { average, count } => (average, count),
    };
    if !(0.0..=5.0).contains(&average) {
        return Err(invalid(
            id,
            format!("rating average {average} is outside [0, 5]"),
        ));
    }
    Ok(Rating { average, count })
}

/// `YYYY-MM-DD` first; bulk-imported rows carry full RFC 3339 timestamps.
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }
    Err(format!("unparseable date \"{value}\""))
}

/// Treats empty and whitespace-only strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn invalid(id: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidRecord {
        id: id.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
