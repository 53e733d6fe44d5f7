//! People directory data types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a person record in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonType {
    /// A guest staying at a property.
    Guest,
    /// A service provider (cleaning, maintenance, ...).
    Provider,
    /// The owner/contact behind a distribution channel.
    DistributionChannel,
    /// Anything else.
    Other,
}

impl std::fmt::Display for PersonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guest => write!(f, "guest"),
            Self::Provider => write!(f, "provider"),
            Self::DistributionChannel => write!(f, "distribution_channel"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for PersonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "provider" => Ok(Self::Provider),
            "distribution_channel" => Ok(Self::DistributionChannel),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown person type: {s}")),
        }
    }
}

/// People directory validation errors.
///
/// Messages are user-facing and kept in Spanish, matching the product's
/// interface language.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeopleError {
    /// Neither a first name nor a company name was provided.
    #[error("Debe indicar un nombre o una empresa")]
    MissingName,
}
