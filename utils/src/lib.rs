//! Shared utilities for the RxR dashboard.

pub mod logging;

pub use logging::{init_logging, LogFormat};
