//! Nullable store: thread-safe in-memory address log for testing.

use rxr_store::{AddressLogStore, StoreError};
use rxr_types::AddressRecord;
use std::sync::Mutex;

/// An in-memory address log for testing.
/// Thread-safe so it can sit behind an `Arc` in concurrent tests.
pub struct NullAddressLog {
    records: Mutex<Vec<AddressRecord>>,
    writes: Mutex<u64>,
    failure: Option<String>,
}

impl NullAddressLog {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start with existing records, as if loaded from disk.
    pub fn with_records(records: Vec<AddressRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            writes: Mutex::new(0),
            failure: None,
        }
    }

    /// A log whose every read and write fails with a backend error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Number of times the log was rewritten.
    pub fn write_count(&self) -> u64 {
        *self.writes.lock().unwrap()
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(reason) => Err(StoreError::Backend(reason.clone())),
            None => Ok(()),
        }
    }
}

impl Default for NullAddressLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressLogStore for NullAddressLog {
    fn load_all(&self) -> Result<Vec<AddressRecord>, StoreError> {
        self.check()?;
        Ok(self.records.lock().unwrap().clone())
    }

    fn insert_if_absent(&self, record: &AddressRecord) -> Result<bool, StoreError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.has_address(record.address())) {
            return Ok(false);
        }
        records.push(record.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(true)
    }
}
