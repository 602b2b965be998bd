//! Proof-of-address intake.
//!
//! An uploaded registration, insurance card, vehicle history report, or
//! billing statement goes through four steps:
//! - the raw upload is archived under a timestamped name,
//! - a [`TextExtractor`] turns it into text (PDF text layer or OCR),
//! - the text is run through the Family Plan [`AddressVerifier`],
//! - the result is reported as an [`IntakeDecision`].
//!
//! Documents that cannot be read are not errors: they are routed to manual
//! review. Only archive and address-log failures surface as [`IntakeError`].
//!
//! [`AddressVerifier`]: rxr_verification::AddressVerifier

pub mod archive;
pub mod clock;
pub mod document;
pub mod error;
pub mod extractor;
pub mod report;
pub mod service;

pub use archive::UploadArchive;
pub use clock::{Clock, SystemClock};
pub use document::DocumentKind;
pub use error::{ExtractionError, IntakeError};
pub use extractor::{CommandTextExtractor, TextExtractor};
pub use report::{IntakeDecision, IntakeReport};
pub use service::IntakeService;
