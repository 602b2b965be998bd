use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonLogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path} is not a valid address log: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<JsonLogError> for rxr_store::StoreError {
    fn from(e: JsonLogError) -> Self {
        match e {
            JsonLogError::Io(io) => rxr_store::StoreError::Io(io),
            JsonLogError::Corrupt { .. } => rxr_store::StoreError::Corruption(e.to_string()),
            JsonLogError::Serialization(s) => rxr_store::StoreError::Serialization(s.to_string()),
        }
    }
}
