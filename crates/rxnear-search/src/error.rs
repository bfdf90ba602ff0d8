use rxnear_geo::GeoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("proximity input rejected: {0}")]
    Geo(#[from] GeoError),

    #[error("query \"{query}\" is too short: need at least 2 characters")]
    QueryTooShort { query: String },
}
