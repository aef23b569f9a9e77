use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{ChainFamily, IdentifierKind, NetworkType};

/// Globally unique 64-bit chain selector
///
/// Uniqueness spans every family and both production and test tables; it is
/// asserted by the registry's invariant checker, not by construction.
pub type Selector = u64;

/// A family-scoped native chain identifier
///
/// The variant in use is dictated by the owning family's
/// [`IdentifierKind`]; two identifiers only compare equal within the same
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChainIdentifier {
    /// Unsigned numeric chain ID
    Numeric(u64),
    /// Signed workchain ID
    Workchain(i32),
    /// Opaque string identifier
    Named(String),
}

impl ChainIdentifier {
    /// Parses a raw string into the identifier representation `family` expects
    ///
    /// Returns a description of the failure when the raw string does not fit
    /// the family's native type.
    pub fn parse(family: ChainFamily, raw: &str) -> Result<Self, String> {
        match family.identifier_kind() {
            IdentifierKind::Numeric => raw
                .parse::<u64>()
                .map(Self::Numeric)
                .map_err(|_| format!("invalid chain id {} for family {}", raw, family)),
            IdentifierKind::Workchain => raw
                .parse::<i32>()
                .map(Self::Workchain)
                .map_err(|_| format!("invalid chain id {} for family {}", raw, family)),
            IdentifierKind::Named => {
                if raw.is_empty() {
                    Err(format!("empty chain id for family {}", family))
                } else {
                    Ok(Self::Named(raw.to_string()))
                }
            }
        }
    }
}

impl fmt::Display for ChainIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{}", id),
            Self::Workchain(id) => write!(f, "{}", id),
            Self::Named(id) => write!(f, "{}", id),
        }
    }
}

/// Chain metadata attached to a selector in any data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDetails {
    pub selector: Selector,
    /// Human-readable name; empty means the chain identifier doubles as the
    /// display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub network_type: Option<NetworkType>,
}

impl ChainDetails {
    /// The name shown to humans, never empty
    pub fn display_name(&self, chain_id: &ChainIdentifier) -> String {
        if self.name.is_empty() {
            chain_id.to_string()
        } else {
            self.name.clone()
        }
    }
}

/// A fully resolved registry row: family, native identifier and details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub family: ChainFamily,
    pub chain_id: ChainIdentifier,
    pub details: ChainDetails,
}
