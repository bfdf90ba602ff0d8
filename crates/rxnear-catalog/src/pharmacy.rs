use std::fmt;

use rxnear_geo::Coordinate;
use serde::{Deserialize, Serialize};

use crate::hours::OperatingHours;

/// Postal address. `street` is optional because directory imports often
/// carry only locality-level data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub city: String,
    pub state: String,
    /// Six-digit postal code, stored as a string to keep leading zeros.
    pub pincode: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "India".to_string()
}

impl fmt::Display for Address {
    /// One-line form: the populated parts of street, city, state, pincode
    /// joined with `", "`. Country is left off; every directory row is
    /// domestic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::with_capacity(4);
        if let Some(street) = self.street.as_deref() {
            if !street.is_empty() {
                parts.push(street);
            }
        }
        for part in [&self.city, &self.state, &self.pincode] {
            if !part.is_empty() {
                parts.push(part);
            }
        }
        f.write_str(&parts.join(", "))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Ten-digit mobile or landline number, digits only.
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub email: Option<String>,
}

/// Aggregate customer rating as the directory service reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Mean score in [0, 5].
    pub average: f64,
    /// Number of ratings behind the average; 0 when the upstream row only
    /// carried a bare score.
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PharmacyService {
    HomeDelivery,
    #[serde(rename = "24_hours")]
    RoundTheClock,
    OnlineOrdering,
    PrescriptionService,
    Consultation,
}

impl PharmacyService {
    /// Parses the directory's snake_case service tag; `None` for anything
    /// outside the declared set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "home_delivery" => Some(Self::HomeDelivery),
            "24_hours" => Some(Self::RoundTheClock),
            "online_ordering" => Some(Self::OnlineOrdering),
            "prescription_service" => Some(Self::PrescriptionService),
            "consultation" => Some(Self::Consultation),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HomeDelivery => "home_delivery",
            Self::RoundTheClock => "24_hours",
            Self::OnlineOrdering => "online_ordering",
            Self::PrescriptionService => "prescription_service",
            Self::Consultation => "consultation",
        }
    }
}

impl fmt::Display for PharmacyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pharmacy as listed by the directory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PharmacyRecord {
    /// Upstream object id, stored as a string (Mongo-style hex, not numeric).
    pub id: String,
    pub name: String,
    /// State pharmacy council registration number.
    pub license_number: Option<String>,
    /// Missing for rows that predate geocoding; proximity search skips
    /// unlocated pharmacies rather than failing the whole query.
    pub location: Option<Coordinate>,
    pub address: Address,
    pub contact: ContactInfo,
    #[serde(default)]
    pub hours: OperatingHours,
    #[serde(default)]
    pub services: Vec<PharmacyService>,
    pub rating: Option<Rating>,
    /// Directory moderation flag, set after license review.
    pub verified: bool,
    pub active: bool,
}

impl PharmacyRecord {
    /// Case-insensitive substring match over name, street, and city. An
    /// empty or whitespace-only query matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self
                .address
                .street
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&needle))
            || self.address.city.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn offers(&self, service: PharmacyService) -> bool {
        self.services.contains(&service)
    }
}
