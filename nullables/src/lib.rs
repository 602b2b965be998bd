//! Nullable infrastructure for deterministic testing.
//!
//! Every external dependency (clock, address-log storage, OCR/PDF text
//! extraction, SMS delivery, chat completion) is abstracted behind a trait.
//! This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be scripted to fail
//! - Record what they were asked to do
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod completion;
pub mod extractor;
pub mod sms;
pub mod store;

pub use clock::NullClock;
pub use completion::NullCompletionClient;
pub use extractor::NullExtractor;
pub use sms::NullSmsGateway;
pub use store::NullAddressLog;
