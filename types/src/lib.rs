//! Fundamental types for the RxR dashboard.
//!
//! This crate defines the value types shared by every other crate in the
//! workspace: address-log records, verification outcomes, bookable services,
//! and chat messages.

pub mod chat;
pub mod error;
pub mod outcome;
pub mod record;
pub mod service;

pub use chat::{ChatMessage, ChatRole};
pub use error::RxrError;
pub use outcome::VerificationOutcome;
pub use record::AddressRecord;
pub use service::ServiceType;
