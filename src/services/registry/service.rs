use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use log::warn;

use crate::{
	models::{
		ChainDetails, ChainFamily, ChainIdentifier, RegistryConfig, RegistryEntry, Selector,
	},
	repositories::{OverrideRepository, StaticTableStore},
	services::remote::{fetch_selector_tables, RemoteSnapshot},
};

use super::error::RegistryError;

/// Parses a family wire name into its enum value
///
/// The string-typed entry point for callers handling untrusted family names;
/// typed callers use [`ChainFamily`] directly.
pub fn parse_family(name: &str) -> Result<ChainFamily, RegistryError> {
	ChainFamily::from_str(name).map_err(RegistryError::unsupported_family)
}

/// The family-agnostic resolution engine
///
/// Answers every query by walking the same precedence chain: compiled-in
/// static tables, then operator overrides, then (only when enabled) a frozen
/// remote snapshot fetched at most once per process. Identifier maps are
/// strictly partitioned by family; only the selector namespace is flat.
///
/// The service is passive and synchronous. The single blocking point is the
/// one-time remote fetch on the first lookup that misses both local sources.
pub struct RegistryService {
	static_store: &'static StaticTableStore,
	overrides: OverrideRepository,
	config: RegistryConfig,
	// None until the first local miss with the remote datasource enabled;
	// frozen afterwards, even when the fetch failed and left it empty
	remote: RwLock<Option<Arc<RemoteSnapshot>>>,
}

impl RegistryService {
	/// Creates a registry with the given configuration
	///
	/// With `strict` set, the selector uniqueness invariant is verified
	/// before the registry is handed out.
	pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
		let service = RegistryService {
			static_store: StaticTableStore::shared(),
			overrides: OverrideRepository::new(config.override_source.clone()),
			config,
			remote: RwLock::new(None),
		};
		if service.config.strict {
			service.verify_selector_uniqueness()?;
		}
		Ok(service)
	}

	/// Creates a registry configured from the process environment
	pub fn from_env() -> Result<Self, RegistryError> {
		Self::new(RegistryConfig::from_env())
	}

	/// Resolves a chain's selector from its family-native identifier
	pub fn selector_from_chain_id(
		&self,
		family: ChainFamily,
		chain_id: &str,
	) -> Result<Selector, RegistryError> {
		let parsed = self.parse_identifier(family, chain_id)?;
		self.lookup_details(family, &parsed)
			.map(|details| details.selector)
			.ok_or_else(|| {
				RegistryError::not_found(format!(
					"chain selector not found for chain {} in family {}",
					chain_id, family
				))
			})
	}

	/// Resolves a selector to the owning chain's native identifier
	pub fn chain_id_from_selector(
		&self,
		selector: Selector,
	) -> Result<ChainIdentifier, RegistryError> {
		self.entry_by_selector(selector).map(|entry| entry.chain_id)
	}

	/// Resolves a selector to its owning family
	pub fn family_from_selector(&self, selector: Selector) -> Result<ChainFamily, RegistryError> {
		self.entry_by_selector(selector).map(|entry| entry.family)
	}

	/// Resolves a selector to the full registry entry
	pub fn entry_by_selector(&self, selector: Selector) -> Result<RegistryEntry, RegistryError> {
		self.lookup_entry(selector).ok_or_else(|| {
			RegistryError::not_found(format!("unknown chain selector {}", selector))
		})
	}

	/// Resolves the details of a chain from its identifier and family
	///
	/// An empty name in the underlying record is replaced by the string form
	/// of the chain identifier, so the returned name is never empty.
	pub fn details_by_chain_id_and_family(
		&self,
		chain_id: &str,
		family: ChainFamily,
	) -> Result<ChainDetails, RegistryError> {
		let parsed = self.parse_identifier(family, chain_id)?;
		let mut details = self.lookup_details(family, &parsed).ok_or_else(|| {
			RegistryError::not_found(format!(
				"chain {} not found in family {}",
				chain_id, family
			))
		})?;
		if details.name.is_empty() {
			details.name = parsed.to_string();
		}
		Ok(details)
	}

	/// Resolves the display name of a chain
	pub fn name_from_chain_id(
		&self,
		family: ChainFamily,
		chain_id: &str,
	) -> Result<String, RegistryError> {
		self.details_by_chain_id_and_family(chain_id, family)
			.map(|details| details.name)
	}

	/// Whether any consulted source knows the selector
	pub fn is_known_selector(&self, selector: Selector) -> bool {
		self.lookup_entry(selector).is_some()
	}

	/// All selectors of one family across the local sources, sorted
	///
	/// The returned vector is a copy; mutating it does not affect the
	/// registry.
	pub fn selectors_for_family(&self, family: ChainFamily) -> Vec<Selector> {
		let mut selectors: Vec<Selector> = self
			.static_store
			.family_table(family)
			.map(|table| table.values().map(|details| details.selector).collect())
			.unwrap_or_default();
		selectors.extend(
			self.overrides
				.tables_snapshot()
				.get(&family)
				.map(|table| table.values().map(|details| details.selector).collect())
				.unwrap_or_else(Vec::new),
		);
		selectors.sort_unstable();
		selectors
	}

	/// All chain identifiers of one family across the local sources
	pub fn chain_ids_for_family(&self, family: ChainFamily) -> Vec<ChainIdentifier> {
		let mut chain_ids: Vec<ChainIdentifier> = self
			.static_store
			.family_table(family)
			.map(|table| table.keys().cloned().collect())
			.unwrap_or_default();
		chain_ids.extend(
			self.overrides
				.tables_snapshot()
				.get(&family)
				.map(|table| table.keys().cloned().collect())
				.unwrap_or_else(Vec::new),
		);
		chain_ids
	}

	/// Chain identifiers defined by the compiled-in test-network table
	pub fn test_chain_ids(&self, family: ChainFamily) -> Vec<ChainIdentifier> {
		self.static_store.test_chain_ids(family)
	}

	/// Drops the frozen remote snapshot so the next local miss refetches
	pub fn clear_remote_cache(&self) {
		let mut guard = self.remote.write().unwrap();
		*guard = None;
	}

	/// Verifies that no two chains across all families share a selector
	///
	/// Covers the compiled-in tables and the loaded override data. A
	/// violation means every caller relying on selector-based resolution may
	/// receive wrong answers, so it is reported as a data integrity
	/// violation rather than an ordinary lookup failure.
	pub fn verify_selector_uniqueness(&self) -> Result<(), RegistryError> {
		let mut seen: HashMap<Selector, (ChainFamily, String)> = HashMap::new();
		let overrides = self.overrides.tables_snapshot();
		let sources = self
			.static_store
			.tables()
			.iter()
			.chain(overrides.iter());

		for (family, table) in sources {
			for (chain_id, details) in table {
				if let Some((other_family, other_id)) = seen.insert(
					details.selector,
					(*family, chain_id.to_string()),
				) {
					return Err(RegistryError::data_integrity_violation(format!(
						"selector {} is shared by {}/{} and {}/{}",
						details.selector, other_family, other_id, family, chain_id
					)));
				}
			}
		}
		Ok(())
	}

	fn parse_identifier(
		&self,
		family: ChainFamily,
		chain_id: &str,
	) -> Result<ChainIdentifier, RegistryError> {
		ChainIdentifier::parse(family, chain_id).map_err(RegistryError::malformed_identifier)
	}

	/// Walks the precedence chain for a (family, identifier) pair
	fn lookup_details(
		&self,
		family: ChainFamily,
		chain_id: &ChainIdentifier,
	) -> Option<ChainDetails> {
		if let Some(details) = self.static_store.details(family, chain_id) {
			return Some(details.clone());
		}
		if let Some(details) = self.overrides.details(family, chain_id) {
			return Some(details);
		}
		self.remote_snapshot()
			.and_then(|snapshot| snapshot.details(family, chain_id).cloned())
	}

	/// Walks the precedence chain for a selector
	fn lookup_entry(&self, selector: Selector) -> Option<RegistryEntry> {
		if let Some(entry) = self.static_store.entry_by_selector(selector) {
			return Some(entry.clone());
		}
		if let Some(entry) = self.overrides.entry_by_selector(selector) {
			return Some(entry);
		}
		self.remote_snapshot()
			.and_then(|snapshot| snapshot.entry_by_selector(selector).cloned())
	}

	/// The frozen remote snapshot, fetched on first use
	///
	/// Disabled registries never consult the network. The first caller to
	/// reach this with a cold snapshot performs the fetch while holding the
	/// write lock; concurrent callers wait and observe the same result. A
	/// failed fetch freezes an empty snapshot so local-only resolution keeps
	/// working, and is not retried unless the cache is cleared explicitly.
	fn remote_snapshot(&self) -> Option<Arc<RemoteSnapshot>> {
		if !self.config.remote_enabled {
			return None;
		}

		{
			let guard = self.remote.read().unwrap();
			if let Some(snapshot) = guard.as_ref() {
				return Some(snapshot.clone());
			}
		}

		let mut guard = self.remote.write().unwrap();
		if guard.is_none() {
			let snapshot =
				match fetch_selector_tables(&self.config.remote_url, self.config.fetch_timeout) {
					Ok(tables) => RemoteSnapshot::new(tables),
					Err(e) => {
						warn!(
							"Remote selector fetch failed, continuing with local data only: {}",
							e
						);
						RemoteSnapshot::empty()
					}
				};
			*guard = Some(Arc::new(snapshot));
		}
		guard.clone()
	}
}
