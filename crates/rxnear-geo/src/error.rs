use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid coordinate: latitude {lat} must be in [-90, 90] and longitude {lon} in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("invalid search radius {radius_km} km: must be finite and greater than zero")]
    InvalidRadius { radius_km: f64 },
}
