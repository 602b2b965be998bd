//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the RxR dashboard.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RxrError {
    #[error("unknown service type: {0}")]
    InvalidServiceType(String),

    #[error("unknown chat role: {0}")]
    InvalidChatRole(String),

    #[error("address record must have a non-empty address")]
    EmptyAddress,
}
