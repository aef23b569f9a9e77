//! Core services implementing the registry's behavior.
//!
//! Contains the main service modules:
//!
//! - `registry`: the family-agnostic resolution engine and its invariant
//!   checker
//! - `remote`: the remote fallback datasource, its snapshot type and the
//!   TTL-cached client

pub mod registry;
pub mod remote;
