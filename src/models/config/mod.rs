//! Configuration models and selector-document parsing.
//!
//! This module contains:
//! - `registry_config`: the environment-driven knobs of a registry instance
//! - `selectors`: the YAML selector-document format shared by the static,
//!   override and remote data sources
//! - `error`: configuration and document error types

mod error;
mod registry_config;
mod selectors;

pub use error::ConfigError;
pub use registry_config::{
    RegistryConfig, CACHE_TTL_ENV, DEFAULT_CACHE_TTL, DEFAULT_FETCH_TIMEOUT, DEFAULT_REMOTE_URL,
    FETCH_TIMEOUT_ENV, OVERRIDE_SOURCE_ENV, REMOTE_ENABLED_ENV, REMOTE_URL_ENV,
};
pub use selectors::{parse_selectors_document, validate_family_table, FamilyTable, SelectorTables};
