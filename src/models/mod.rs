//! Domain models and data structures for the chain selector registry.
//!
//! This module contains all the core data structures used throughout the crate:
//!
//! - `config`: registry configuration and the selector-document format
//! - `core`: core domain models (families, chain identifiers, chain details)

mod config;
mod core;

// Re-export core types
pub use core::{
    ChainDetails, ChainFamily, ChainIdentifier, IdentifierKind, NetworkType, RegistryEntry,
    Selector,
};

// Re-export config types
pub use config::{
    parse_selectors_document, validate_family_table, ConfigError, FamilyTable, RegistryConfig,
    SelectorTables, CACHE_TTL_ENV, DEFAULT_CACHE_TTL, DEFAULT_FETCH_TIMEOUT, DEFAULT_REMOTE_URL,
    FETCH_TIMEOUT_ENV, OVERRIDE_SOURCE_ENV, REMOTE_ENABLED_ENV, REMOTE_URL_ENV,
};
