//! The closed set of ledger deployments an entity can come from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Which ledger deployment a resolved entity belongs to.
///
/// The tag is carried verbatim into every normalized document and into its
/// unique identifier, so the string forms below are part of the downstream
/// index contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Wax,
    Eos,
    Proton,
}

impl Network {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Network::Wax => "wax",
            Network::Eos => "eos",
            Network::Proton => "proton",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wax" => Ok(Network::Wax),
            "eos" => Ok(Network::Eos),
            "proton" => Ok(Network::Proton),
            other => Err(Error::UnknownNetwork(other.to_string())),
        }
    }
}
