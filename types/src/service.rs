//! Bookable detailing services.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::RxrError;

/// Service selected on the booking form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Interior,
    Exterior,
    InteriorExterior,
    Ceramic,
    Subscription,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        Self::Interior,
        Self::Exterior,
        Self::InteriorExterior,
        Self::Ceramic,
        Self::Subscription,
    ];

    /// Label shown to customers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Interior => "Interior",
            Self::Exterior => "Exterior",
            Self::InteriorExterior => "Interior + Exterior",
            Self::Ceramic => "Ceramic",
            Self::Subscription => "Subscription",
        }
    }

    /// Kebab-case identifier used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interior => "interior",
            Self::Exterior => "exterior",
            Self::InteriorExterior => "interior-exterior",
            Self::Ceramic => "ceramic",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceType {
    type Err = RxrError;

    /// Accepts either the customer label (any case) or the kebab-case id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|svc| {
                svc.label().eq_ignore_ascii_case(trimmed) || svc.as_str().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| RxrError::InvalidServiceType(s.to_string()))
    }
}
