//! Validated WGS-84 coordinate type.
//!
//! Upstream payloads carry positions in several shapes (flat `lat`/`lng`
//! fields, GeoJSON `[longitude, latitude]` arrays) and rarely range-check
//! them. `Coordinate` is the strict form: construction and deserialization
//! both enforce range and finiteness, so distance math never sees a point
//! that is off the globe.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// A validated point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoordinateParts", into = "CoordinateParts")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting out-of-range or non-finite components.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidCoordinate`] when `lat` falls outside
    /// [-90, 90], `lon` falls outside [-180, 180], or either is NaN or
    /// infinite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        if lat_ok && lon_ok {
            Ok(Self { lat, lon })
        } else {
            Err(GeoError::InvalidCoordinate { lat, lon })
        }
    }

    /// Latitude in decimal degrees, guaranteed within [-90, 90].
    #[must_use]
    pub fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees, guaranteed within [-180, 180].
    #[must_use]
    pub fn lon(self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

/// Wire shape: plain `{ "lat": .., "lon": .. }`. Deserialization funnels
/// through [`Coordinate::new`] so serde input gets the same validation as
/// constructed values.
#[derive(Debug, Serialize, Deserialize)]
struct CoordinateParts {
    lat: f64,
    lon: f64,
}

impl TryFrom<CoordinateParts> for Coordinate {
    type Error = GeoError;

    fn try_from(parts: CoordinateParts) -> Result<Self, Self::Error> {
        Self::new(parts.lat, parts.lon)
    }
}

impl From<Coordinate> for CoordinateParts {
    fn from(c: Coordinate) -> Self {
        Self {
            lat: c.lat,
            lon: c.lon,
        }
    }
}
