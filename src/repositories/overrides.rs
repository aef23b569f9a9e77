use std::sync::{RwLock, RwLockReadGuard};

use log::{info, warn};

use crate::{
    models::{
        parse_selectors_document, ChainDetails, ChainFamily, ChainIdentifier, RegistryEntry,
        Selector, SelectorTables, DEFAULT_FETCH_TIMEOUT, OVERRIDE_SOURCE_ENV,
    },
    repositories::{error::RepositoryError, static_store::StaticTableStore},
    utils::fetch_text,
};

/// Operator-supplied override selectors
///
/// Reads a single selector document from a local file or an `http(s)://`
/// URL, exactly once, on first access. A missing source locator yields an
/// empty table set. An unreadable, unparseable or structurally invalid
/// source aborts the process: continuing with partial override data would
/// silently misresolve chains for the rest of the process lifetime.
///
/// Entries whose chain already exists in the compiled-in tables are dropped
/// with a diagnostic; the compiled-in entry always wins.
pub struct OverrideRepository {
    source: Option<String>,
    tables: RwLock<Option<SelectorTables>>,
}

impl OverrideRepository {
    /// Creates a repository reading from the given source locator
    pub fn new(source: Option<String>) -> Self {
        OverrideRepository {
            source,
            tables: RwLock::new(None),
        }
    }

    /// Creates a repository reading the locator from the environment
    pub fn from_env() -> Self {
        Self::new(std::env::var(OVERRIDE_SOURCE_ENV).ok().filter(|s| !s.is_empty()))
    }

    /// Looks up the override details of a chain, loading the source on first
    /// access
    pub fn details(
        &self,
        family: ChainFamily,
        chain_id: &ChainIdentifier,
    ) -> Option<ChainDetails> {
        let guard = self.loaded();
        guard
            .as_ref()
            .and_then(|tables| tables.get(&family))
            .and_then(|table| table.get(chain_id))
            .cloned()
    }

    /// Resolves a selector against the override tables
    pub fn entry_by_selector(&self, selector: Selector) -> Option<RegistryEntry> {
        let guard = self.loaded();
        let tables = guard.as_ref()?;
        for (family, table) in tables {
            for (chain_id, details) in table {
                if details.selector == selector {
                    return Some(RegistryEntry {
                        family: *family,
                        chain_id: chain_id.clone(),
                        details: details.clone(),
                    });
                }
            }
        }
        None
    }

    /// A defensive copy of the loaded override tables
    pub fn tables_snapshot(&self) -> SelectorTables {
        self.loaded().as_ref().cloned().unwrap_or_default()
    }

    /// Returns the loaded tables, triggering the one-time load if needed
    ///
    /// Concurrent first callers race to the write lock; the winner loads,
    /// the rest observe the stored result.
    fn loaded(&self) -> RwLockReadGuard<'_, Option<SelectorTables>> {
        {
            let guard = self.tables.read().unwrap();
            if guard.is_some() {
                return guard;
            }
        }

        {
            let mut guard = self.tables.write().unwrap();
            if guard.is_none() {
                *guard = Some(self.load());
            }
        }

        self.tables.read().unwrap()
    }

    /// Reads and parses the override source
    ///
    /// Fatal on any read, parse or validation failure.
    fn load(&self) -> SelectorTables {
        let source = match &self.source {
            Some(source) => source,
            None => return SelectorTables::new(),
        };

        let raw = if source.starts_with("http://") || source.starts_with("https://") {
            match fetch_text(source, DEFAULT_FETCH_TIMEOUT) {
                Ok(body) => body,
                Err(e) => panic!(
                    "{}",
                    RepositoryError::load_error(format!(
                        "failed to fetch override selectors from {}: {}",
                        source, e
                    ))
                ),
            }
        } else {
            match std::fs::read_to_string(source) {
                Ok(body) => body,
                Err(e) => panic!(
                    "{}",
                    RepositoryError::load_error(format!(
                        "failed to read override selectors file {}: {}",
                        source, e
                    ))
                ),
            }
        };

        let tables = match parse_selectors_document(&raw) {
            Ok(tables) => tables,
            Err(e) => panic!(
                "{}",
                RepositoryError::from(e)
            ),
        };

        let filtered = Self::drop_conflicts(tables);
        let loaded: usize = filtered.values().map(|table| table.len()).sum();
        info!("Loaded {} override selector entries from {}", loaded, source);
        filtered
    }

    /// Drops entries already defined by the compiled-in tables
    fn drop_conflicts(tables: SelectorTables) -> SelectorTables {
        let static_store = StaticTableStore::shared();
        let mut filtered = SelectorTables::new();
        for (family, table) in tables {
            for (chain_id, details) in table {
                if static_store.contains(family, &chain_id) {
                    warn!(
                        "Skipping override for chain {} in family {} because it already exists",
                        chain_id, family
                    );
                    continue;
                }
                filtered.entry(family).or_default().insert(chain_id, details);
            }
        }
        filtered
    }
}
