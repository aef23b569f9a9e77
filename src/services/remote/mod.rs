//! Remote fallback datasource.
//!
//! Provides the last-resort selector data source fetched over the network.
//! Includes:
//!
//! - The shared fetch routine used by both lazy-loading mechanisms
//! - A snapshot type with a selector reverse index, rebuilt wholesale on
//!   every successful fetch
//! - A TTL-cached client for callers that query the remote dataset directly
//! - Error handling for remote operations
//!
//! The one-shot fetch-and-freeze mechanism that backs the resolver's
//! precedence chain lives in `services::registry`, which owns the frozen
//! snapshot.

mod client;
mod error;
mod snapshot;

pub use client::{fetch_selector_tables, RemoteSelectorClient};
pub use error::RemoteError;
pub use snapshot::RemoteSnapshot;
