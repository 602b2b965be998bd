//! Abstract storage traits for the RxR address log.
//!
//! Every storage backend (JSON flat file, in-memory for testing) implements
//! these traits. The rest of the codebase depends only on the traits.

pub mod address_log;
pub mod error;

pub use address_log::AddressLogStore;
pub use error::StoreError;
