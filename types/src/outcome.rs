//! Result of checking a document against the address log.

use serde::{Deserialize, Serialize};

/// Classification of one proof-of-address submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// The address was not in the log and has been recorded.
    New { address: String, name: String },
    /// The address already belongs to an approved household. Nothing was written.
    Duplicate { address: String },
    /// No street address could be found in the text.
    Unrecognized,
}

impl VerificationOutcome {
    /// The extracted address, if one was found.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::New { address, .. } | Self::Duplicate { address } => Some(address),
            Self::Unrecognized => None,
        }
    }

    /// Short machine-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New { .. } => "new",
            Self::Duplicate { .. } => "duplicate",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Whether this outcome appended to the log.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::New { .. })
    }
}
