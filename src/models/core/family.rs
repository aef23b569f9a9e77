use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Blockchain families supported by the registry
///
/// Each family owns its own chain-identifier scheme; selectors are the only
/// namespace shared across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    Evm,
    Solana,
    Aptos,
    Sui,
    Ton,
    Tron,
    Starknet,
    Canton,
    Bitcoin,
    Dogecoin,
    Avalanche,
    Beacon,
    Stellar,
    Cosmos,
}

/// Shape of a family's native chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// Unsigned 64-bit chain ID (EVM chain IDs and similar)
    Numeric,
    /// Signed 32-bit workchain ID, can be negative
    Workchain,
    /// Opaque string (genesis hash, network name, passphrase-derived ID)
    Named,
}

impl ChainFamily {
    /// Every family known to the registry
    pub const ALL: [ChainFamily; 14] = [
        ChainFamily::Evm,
        ChainFamily::Solana,
        ChainFamily::Aptos,
        ChainFamily::Sui,
        ChainFamily::Ton,
        ChainFamily::Tron,
        ChainFamily::Starknet,
        ChainFamily::Canton,
        ChainFamily::Bitcoin,
        ChainFamily::Dogecoin,
        ChainFamily::Avalanche,
        ChainFamily::Beacon,
        ChainFamily::Stellar,
        ChainFamily::Cosmos,
    ];

    /// The wire name used as a top-level key in selector documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Solana => "solana",
            Self::Aptos => "aptos",
            Self::Sui => "sui",
            Self::Ton => "ton",
            Self::Tron => "tron",
            Self::Starknet => "starknet",
            Self::Canton => "canton",
            Self::Bitcoin => "bitcoin",
            Self::Dogecoin => "dogecoin",
            Self::Avalanche => "avalanche",
            Self::Beacon => "beacon",
            Self::Stellar => "stellar",
            Self::Cosmos => "cosmos",
        }
    }

    /// The native identifier representation this family uses
    pub fn identifier_kind(&self) -> IdentifierKind {
        match self {
            Self::Evm | Self::Aptos | Self::Sui | Self::Tron | Self::Beacon => {
                IdentifierKind::Numeric
            }
            Self::Ton => IdentifierKind::Workchain,
            Self::Solana
            | Self::Starknet
            | Self::Canton
            | Self::Bitcoin
            | Self::Dogecoin
            | Self::Avalanche
            | Self::Stellar
            | Self::Cosmos => IdentifierKind::Named,
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChainFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|family| family.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown chain family {}", s))
    }
}

/// Deployment class of a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Testnet,
    Localnet,
    Futurenet,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Localnet => "localnet",
            Self::Futurenet => "futurenet",
        };
        write!(f, "{}", name)
    }
}
