//! Address log storage trait.

use crate::StoreError;
use rxr_types::AddressRecord;

/// Trait for the persisted Family Plan address log.
///
/// The log is an ordered, append-only sequence of [`AddressRecord`]s in which
/// no two records share a byte-identical address.
pub trait AddressLogStore {
    /// Read the whole log in insertion order.
    fn load_all(&self) -> Result<Vec<AddressRecord>, StoreError>;

    /// Append `record` unless its address is already present.
    ///
    /// The lookup and the append happen as one step: two concurrent callers
    /// with different addresses both land, and two with the same address
    /// produce exactly one record. Returns `true` if the record was appended.
    fn insert_if_absent(&self, record: &AddressRecord) -> Result<bool, StoreError>;

    /// Exact, case-sensitive lookup by address.
    fn contains_address(&self, address: &str) -> Result<bool, StoreError> {
        Ok(self.load_all()?.iter().any(|r| r.has_address(address)))
    }

    /// Number of records in the log.
    fn record_count(&self) -> Result<u64, StoreError> {
        self.load_all().map(|v| v.len() as u64)
    }
}

impl<S: AddressLogStore + ?Sized> AddressLogStore for &S {
    fn load_all(&self) -> Result<Vec<AddressRecord>, StoreError> {
        (**self).load_all()
    }

    fn insert_if_absent(&self, record: &AddressRecord) -> Result<bool, StoreError> {
        (**self).insert_if_absent(record)
    }

    fn contains_address(&self, address: &str) -> Result<bool, StoreError> {
        (**self).contains_address(address)
    }

    fn record_count(&self) -> Result<u64, StoreError> {
        (**self).record_count()
    }
}

impl<S: AddressLogStore + ?Sized> AddressLogStore for std::sync::Arc<S> {
    fn load_all(&self) -> Result<Vec<AddressRecord>, StoreError> {
        (**self).load_all()
    }

    fn insert_if_absent(&self, record: &AddressRecord) -> Result<bool, StoreError> {
        (**self).insert_if_absent(record)
    }

    fn contains_address(&self, address: &str) -> Result<bool, StoreError> {
        (**self).contains_address(address)
    }

    fn record_count(&self) -> Result<u64, StoreError> {
        (**self).record_count()
    }
}
