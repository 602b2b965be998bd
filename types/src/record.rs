//! Address-log record.

use serde::{Deserialize, Serialize};

use crate::RxrError;

/// One accepted household in the address log.
///
/// Records are immutable once written. The `address` string is the only
/// deduplication key and is compared byte-for-byte.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(default = "unknown_name")]
    name: String,
    address: String,
}

fn unknown_name() -> String {
    AddressRecord::UNKNOWN_NAME.to_string()
}

impl AddressRecord {
    /// Name stored when no holder name could be extracted.
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Build a record, falling back to [`Self::UNKNOWN_NAME`] when `name` is absent.
    pub fn new(name: Option<String>, address: impl Into<String>) -> Result<Self, RxrError> {
        let address = address.into();
        if address.is_empty() {
            return Err(RxrError::EmptyAddress);
        }
        Ok(Self {
            name: name.unwrap_or_else(unknown_name),
            address,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Exact, case-sensitive match against another address string.
    pub fn has_address(&self, address: &str) -> bool {
        self.address == address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_defaults_to_unknown() {
        let record = AddressRecord::new(None, "123 Main Street").unwrap();
        assert_eq!(record.name(), "Unknown");
        assert_eq!(record.address(), "123 Main Street");
    }

    #[test]
    fn empty_address_is_rejected() {
        assert_eq!(
            AddressRecord::new(Some("John Smith".into()), ""),
            Err(RxrError::EmptyAddress)
        );
    }

    #[test]
    fn address_match_is_case_sensitive() {
        let record = AddressRecord::new(None, "123 Main Street").unwrap();
        assert!(record.has_address("123 Main Street"));
        assert!(!record.has_address("123 main street"));
        assert!(!record.has_address("123 Main St"));
    }

    #[test]
    fn legacy_entry_without_name_loads_as_unknown() {
        let record: AddressRecord = serde_json::from_str(r#"{"address":"77 Elm Rd"}"#).unwrap();
        assert_eq!(record.name(), "Unknown");
    }

    #[test]
    fn entry_without_address_does_not_load() {
        assert!(serde_json::from_str::<AddressRecord>(r#"{"name":"John Smith"}"#).is_err());
        assert!(serde_json::from_str::<Vec<AddressRecord>>(
            r#"[{"name":"A B","address":"100 Elm Rd"},{"name":"John Smith"}]"#
        )
        .is_err());
    }

    #[test]
    fn serialized_shape_is_name_then_address() {
        let record = AddressRecord::new(Some("John Smith".into()), "4521 Oak Avenue").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"John Smith","address":"4521 Oak Avenue"}"#);
    }
}
