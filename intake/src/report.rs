//! Intake results and their user-facing wording.

use std::path::PathBuf;

use rxr_types::VerificationOutcome;
use serde::Serialize;

/// What happened to one upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum IntakeDecision {
    /// Text was extracted and checked against the address log.
    Verified { outcome: VerificationOutcome },
    /// The document could not be read; a person has to look at it.
    NeedsManualReview { reason: String },
}

impl IntakeDecision {
    /// Message shown to whoever submitted the document.
    pub fn user_message(&self) -> String {
        match self {
            Self::Verified {
                outcome: VerificationOutcome::New { address, .. },
            } => format!("Found address: {address}. New address saved to records."),
            Self::Verified {
                outcome: VerificationOutcome::Duplicate { address },
            } => format!(
                "Found address: {address}. This address matches an existing Family Plan member. Access approved."
            ),
            Self::Verified {
                outcome: VerificationOutcome::Unrecognized,
            } => "Could not confidently find a valid address.".to_string(),
            Self::NeedsManualReview { .. } => {
                "Could not process the file. It will be reviewed manually.".to_string()
            }
        }
    }

    pub fn outcome(&self) -> Option<&VerificationOutcome> {
        match self {
            Self::Verified { outcome } => Some(outcome),
            Self::NeedsManualReview { .. } => None,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct IntakeReport {
    /// Where the raw upload was archived.
    pub saved_path: PathBuf,
    pub decision: IntakeDecision,
}
