//! JSON flat-file storage backend for the RxR address log.
//!
//! The whole log lives in one pretty-printed JSON array. Every change is a
//! full read-modify-write performed under a lock, and the rewrite goes through
//! a temporary file in the same directory that is renamed over the original,
//! so a failed write never leaves a half-written log behind.

pub mod error;
pub mod log;

pub use error::JsonLogError;
pub use log::JsonAddressLog;
