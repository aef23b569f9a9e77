//! Cross-blockchain identity registry.
//!
//! This crate resolves family-native chain identifiers (numeric chain IDs,
//! base58 genesis hashes, signed workchain IDs, network names) to globally
//! unique 64-bit selectors and back, across structurally different
//! blockchain families.
//!
//! # Architecture
//! Resolution merges three data sources with deterministic precedence:
//! - Static tables: production and test-network data compiled into the
//!   binary, the immutable ground truth
//! - Overrides: an optional operator-supplied document, loaded once at first
//!   access, never shadowing a compiled-in entry
//! - Remote fallback: an optional selector document fetched over HTTP,
//!   consulted only when both local sources miss
//!
//! # Flow
//! 1. The static tables are parsed once, at first use; defective embedded
//!    data aborts the process
//! 2. A [`services::registry::RegistryService`] walks the precedence chain
//!    for each query, partitioned strictly by family
//! 3. With the remote datasource enabled, the first local miss triggers a
//!    single fetch whose result (or empty substitute) is frozen for the
//!    process lifetime
//! 4. [`services::remote::RemoteSelectorClient`] offers direct, TTL-cached
//!    access to the remote dataset for callers that want fresh data
//!
//! The selector namespace is flat: no two chains in any family may share a
//! selector, and the registry's invariant checker enforces exactly that.

pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
