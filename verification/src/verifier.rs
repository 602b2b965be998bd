//! Address-log verifier: classify a document as a new household, an existing
//! Family Plan household, or unreadable.

use rxr_store::AddressLogStore;
use rxr_types::{AddressRecord, VerificationOutcome};

use crate::extract::extract_fields;
use crate::VerificationError;

/// Checks extracted addresses against the address log and records new ones.
///
/// Only the `New` path writes to storage. A storage failure aborts the call
/// without touching the log.
pub struct AddressVerifier<S> {
    store: S,
}

impl<S: AddressLogStore> AddressVerifier<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Verify one document's text.
    pub fn verify(&self, text: &str) -> Result<VerificationOutcome, VerificationError> {
        let fields = extract_fields(text);

        let Some(address) = fields.address else {
            tracing::warn!(text_len = text.len(), "no street address found in document");
            return Ok(VerificationOutcome::Unrecognized);
        };

        let record = AddressRecord::new(fields.name, address)?;
        let appended = self.store.insert_if_absent(&record)?;

        if appended {
            tracing::info!(
                address = record.address(),
                name = record.name(),
                "new Family Plan address recorded"
            );
            Ok(VerificationOutcome::New {
                address: record.address().to_string(),
                name: record.name().to_string(),
            })
        } else {
            tracing::info!(
                address = record.address(),
                "address matches an existing Family Plan household"
            );
            Ok(VerificationOutcome::Duplicate {
                address: record.address().to_string(),
            })
        }
    }

    /// All accepted households, oldest first.
    pub fn records(&self) -> Result<Vec<AddressRecord>, VerificationError> {
        Ok(self.store.load_all()?)
    }
}
