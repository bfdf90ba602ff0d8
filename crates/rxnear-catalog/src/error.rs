use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
