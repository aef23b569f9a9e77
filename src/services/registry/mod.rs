//! The registry resolution engine.
//!
//! Provides the family-agnostic resolver that answers selector and chain-ID
//! queries against the merged data sources. Includes:
//!
//! - The resolution service walking the static, override and remote sources
//!   in precedence order
//! - The selector uniqueness invariant checker
//! - Error handling for registry queries

mod error;
mod service;

pub use error::RegistryError;
pub use service::{parse_family, RegistryService};
