use std::collections::HashMap;
use std::str::FromStr;

use log::warn;

use crate::models::{ChainDetails, ChainFamily, ChainIdentifier, IdentifierKind};

use super::error::ConfigError;

/// Chain identifier to details map for one family
pub type FamilyTable = HashMap<ChainIdentifier, ChainDetails>;

/// Per-family selector tables, the in-memory form of a selector document
pub type SelectorTables = HashMap<ChainFamily, FamilyTable>;

/// Expected byte length of a decoded base58 genesis hash
const GENESIS_HASH_LEN: usize = 32;

/// Parses a selector document into per-family tables
///
/// The document is a YAML mapping keyed by family name, each value a mapping
/// from that family's native chain identifier to its details:
///
/// ```yaml
/// evm:
///   1:
///     selector: 5009297550715157269
///     name: "ethereum-mainnet"
/// ```
///
/// Unknown family keys are skipped with a warning so that a newer document
/// can still be read by an older binary. Identifier keys that do not fit the
/// family's native type and entries failing family-specific structural
/// validation are errors.
pub fn parse_selectors_document(raw: &str) -> Result<SelectorTables, ConfigError> {
    let document: Option<HashMap<String, HashMap<serde_yaml::Value, ChainDetails>>> =
        serde_yaml::from_str(raw)?;

    let mut tables = SelectorTables::new();
    for (family_name, entries) in document.unwrap_or_default() {
        let family = match ChainFamily::from_str(&family_name) {
            Ok(family) => family,
            Err(_) => {
                warn!(
                    "Skipping unknown family {} in selector document",
                    family_name
                );
                continue;
            }
        };

        let table = tables.entry(family).or_default();
        for (key, details) in entries {
            let chain_id = identifier_from_key(family, &key)?;
            table.insert(chain_id, details);
        }
    }

    for (family, table) in &tables {
        validate_family_table(*family, table)?;
    }

    Ok(tables)
}

/// Converts a YAML mapping key into the identifier representation the family
/// expects
fn identifier_from_key(
    family: ChainFamily,
    key: &serde_yaml::Value,
) -> Result<ChainIdentifier, ConfigError> {
    let parsed = match family.identifier_kind() {
        IdentifierKind::Numeric => key.as_u64().map(ChainIdentifier::Numeric).or_else(|| {
            key.as_str()
                .and_then(|s| s.parse::<u64>().ok())
                .map(ChainIdentifier::Numeric)
        }),
        IdentifierKind::Workchain => key
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .map(ChainIdentifier::Workchain)
            .or_else(|| {
                key.as_str()
                    .and_then(|s| s.parse::<i32>().ok())
                    .map(ChainIdentifier::Workchain)
            }),
        IdentifierKind::Named => key
            .as_str()
            .filter(|s| !s.is_empty())
            .map(|s| ChainIdentifier::Named(s.to_string())),
    };

    parsed.ok_or_else(|| {
        ConfigError::parse_error(format!(
            "invalid chain id {:?} for family {}",
            key, family
        ))
    })
}

/// Applies family-specific structural constraints to a parsed table
///
/// Solana identifiers are base58 genesis hashes and must decode to exactly
/// 32 bytes. Numeric and workchain identifiers are already validated by key
/// conversion; the remaining string families carry no structural constraint.
pub fn validate_family_table(family: ChainFamily, table: &FamilyTable) -> Result<(), ConfigError> {
    if family != ChainFamily::Solana {
        return Ok(());
    }

    for chain_id in table.keys() {
        let genesis_hash = chain_id.to_string();
        let decoded = bs58::decode(&genesis_hash).into_vec().map_err(|e| {
            ConfigError::validation_error(format!(
                "failed to decode base58 genesis hash {}: {}",
                genesis_hash, e
            ))
        })?;
        if decoded.len() != GENESIS_HASH_LEN {
            return Err(ConfigError::validation_error(format!(
                "decoded genesis hash {} is not {} bytes long",
                genesis_hash, GENESIS_HASH_LEN
            )));
        }
    }
    Ok(())
}
