use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use log::info;

use crate::{
	models::{
		parse_selectors_document, ChainDetails, ChainFamily, ChainIdentifier, ConfigError,
		RegistryConfig, RegistryEntry, Selector, SelectorTables,
	},
	services::registry::RegistryError,
	utils::fetch_text,
};

use super::{error::RemoteError, snapshot::RemoteSnapshot};

/// Fetches and parses the remote selector document
///
/// Network failures, non-success status codes and malformed payloads are
/// recoverable errors. A payload that parses but fails family-specific
/// structural validation aborts the process: it means the authoritative
/// remote dataset itself is corrupt.
pub fn fetch_selector_tables(
	url: &str,
	timeout: Duration,
) -> Result<SelectorTables, RemoteError> {
	info!("Fetching remote selector document from {}", url);
	let body = fetch_text(url, timeout).map_err(|e| {
		RemoteError::fetch_error(format!("failed to fetch remote selectors from {}: {}", url, e))
	})?;

	match parse_selectors_document(&body) {
		Ok(tables) => Ok(tables),
		Err(e @ ConfigError::ValidationError(_)) => {
			panic!("corrupt remote selector document at {}: {}", url, e)
		}
		Err(e) => Err(RemoteError::parse_error(format!(
			"failed to parse remote selectors from {}: {}",
			url, e
		))),
	}
}

struct CachedSnapshot {
	snapshot: Arc<RemoteSnapshot>,
	fetched_at: Instant,
}

/// Time-bounded client for the remote selector datasource
///
/// Queries fetch the full document, cache it with a timestamp and serve
/// from the cache until the configured TTL elapses; the next query after
/// expiry refetches synchronously. A zero TTL disables caching entirely. A
/// failed refetch surfaces to its caller and leaves the cached state
/// untouched.
pub struct RemoteSelectorClient {
	url: String,
	fetch_timeout: Duration,
	cache_ttl: Duration,
	cache: RwLock<Option<CachedSnapshot>>,
}

impl RemoteSelectorClient {
	/// Creates a client from registry configuration
	pub fn new(config: &RegistryConfig) -> Self {
		RemoteSelectorClient {
			url: config.remote_url.clone(),
			fetch_timeout: config.fetch_timeout,
			cache_ttl: config.cache_ttl,
			cache: RwLock::new(None),
		}
	}

	/// Creates a client configured from the process environment
	pub fn from_env() -> Self {
		Self::new(&RegistryConfig::from_env())
	}

	/// Resolves a selector against the remote dataset
	pub fn entry_by_selector(&self, selector: Selector) -> Result<RegistryEntry, RegistryError> {
		let snapshot = self.snapshot()?;
		snapshot
			.entry_by_selector(selector)
			.cloned()
			.ok_or_else(|| {
				RegistryError::not_found(format!("unknown chain selector {}", selector))
			})
	}

	/// Resolves a chain ID within a family against the remote dataset
	pub fn details_by_chain_id_and_family(
		&self,
		chain_id: &str,
		family: ChainFamily,
	) -> Result<ChainDetails, RegistryError> {
		let parsed = ChainIdentifier::parse(family, chain_id)
			.map_err(RegistryError::malformed_identifier)?;
		let snapshot = self.snapshot()?;
		snapshot.details(family, &parsed).cloned().ok_or_else(|| {
			RegistryError::not_found(format!(
				"chain {} not found in family {}",
				chain_id, family
			))
		})
	}

	/// All remote entries of one family
	pub fn entries_for_family(
		&self,
		family: ChainFamily,
	) -> Result<Vec<RegistryEntry>, RegistryError> {
		Ok(self.snapshot()?.entries_for_family(family))
	}

	/// Drops the cached snapshot, forcing the next query to fetch fresh data
	pub fn clear_cache(&self) {
		let mut guard = self.cache.write().unwrap();
		*guard = None;
	}

	/// Returns a fresh-enough snapshot, fetching if the cache is cold or
	/// expired
	///
	/// Concurrent callers with a cold cache serialize on the write lock so
	/// exactly one of them fetches.
	fn snapshot(&self) -> Result<Arc<RemoteSnapshot>, RegistryError> {
		if self.cache_ttl.is_zero() {
			// caching disabled, always fetch fresh
			let tables = fetch_selector_tables(&self.url, self.fetch_timeout)?;
			return Ok(Arc::new(RemoteSnapshot::new(tables)));
		}

		{
			let guard = self.cache.read().unwrap();
			if let Some(cached) = guard.as_ref() {
				if cached.fetched_at.elapsed() < self.cache_ttl {
					return Ok(cached.snapshot.clone());
				}
			}
		}

		let mut guard = self.cache.write().unwrap();
		if let Some(cached) = guard.as_ref() {
			if cached.fetched_at.elapsed() < self.cache_ttl {
				return Ok(cached.snapshot.clone());
			}
		}

		let tables = fetch_selector_tables(&self.url, self.fetch_timeout)?;
		let snapshot = Arc::new(RemoteSnapshot::new(tables));
		*guard = Some(CachedSnapshot {
			snapshot: snapshot.clone(),
			fetched_at: Instant::now(),
		});
		Ok(snapshot)
	}
}
