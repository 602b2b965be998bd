//! Family Plan address verification.
//!
//! A proof-of-address document arrives as raw text (already OCR'd or pulled
//! out of a PDF upstream). Two steps turn it into a decision:
//! 1. **Extraction**: the first holder name and the first street address are
//!    pulled out with fixed regular expressions.
//! 2. **Deduplication**: the address is checked against the address log by
//!    exact string equality. Unseen addresses are appended; seen ones mean the
//!    household already holds a Family Plan.
//!
//! Matching is purely syntactic. "123 Main St" and "123 Main Street" are
//! different households, and any two adjacent capitalized words can be taken
//! as the holder name.

pub mod error;
pub mod extract;
pub mod verifier;

pub use error::VerificationError;
pub use extract::{extract_address, extract_fields, extract_name, ExtractedFields};
pub use verifier::AddressVerifier;
