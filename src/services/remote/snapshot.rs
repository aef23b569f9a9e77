use std::collections::HashMap;

use log::warn;

use crate::models::{
	ChainDetails, ChainFamily, ChainIdentifier, RegistryEntry, Selector, SelectorTables,
};

/// One successfully fetched remote selector dataset
///
/// Built wholesale from a fetched document; never patched incrementally.
/// Carries a selector-to-entry reverse index so selector lookups do not scan
/// every family's map per query.
pub struct RemoteSnapshot {
	tables: SelectorTables,
	by_selector: HashMap<Selector, RegistryEntry>,
}

impl RemoteSnapshot {
	/// A snapshot with no entries, used when the remote source is unavailable
	pub fn empty() -> Self {
		RemoteSnapshot {
			tables: SelectorTables::new(),
			by_selector: HashMap::new(),
		}
	}

	/// Builds a snapshot and its reverse index from fetched tables
	///
	/// A selector appearing twice in the payload keeps its first entry; the
	/// collision is reported and left for the uniqueness checker to flag on
	/// the authoritative side.
	pub fn new(tables: SelectorTables) -> Self {
		let mut by_selector: HashMap<Selector, RegistryEntry> = HashMap::new();
		for (family, table) in &tables {
			for (chain_id, details) in table {
				let entry = RegistryEntry {
					family: *family,
					chain_id: chain_id.clone(),
					details: details.clone(),
				};
				if let Some(existing) = by_selector.get(&details.selector) {
					warn!(
						"Remote selector {} is shared by {}/{} and {}/{}; keeping the first",
						details.selector, existing.family, existing.chain_id, family, chain_id
					);
					continue;
				}
				by_selector.insert(details.selector, entry);
			}
		}
		RemoteSnapshot {
			tables,
			by_selector,
		}
	}

	/// Looks up the details of a chain in the snapshot
	pub fn details(
		&self,
		family: ChainFamily,
		chain_id: &ChainIdentifier,
	) -> Option<&ChainDetails> {
		self.tables.get(&family)?.get(chain_id)
	}

	/// Resolves a selector against the snapshot's reverse index
	pub fn entry_by_selector(&self, selector: Selector) -> Option<&RegistryEntry> {
		self.by_selector.get(&selector)
	}

	/// All entries of one family, as owned copies
	pub fn entries_for_family(&self, family: ChainFamily) -> Vec<RegistryEntry> {
		self.tables
			.get(&family)
			.map(|table| {
				table
					.iter()
					.map(|(chain_id, details)| RegistryEntry {
						family,
						chain_id: chain_id.clone(),
						details: details.clone(),
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Whether the snapshot holds no entries at all
	pub fn is_empty(&self) -> bool {
		self.by_selector.is_empty()
	}
}
