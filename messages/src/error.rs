use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("invalid phone number {0:?}: expected E.164 like +15551234567")]
    InvalidPhone(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("SMS gateway unreachable: {0}")]
    Unreachable(String),

    #[error("SMS request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from SMS gateway: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}
