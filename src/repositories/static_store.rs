use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    models::{
        parse_selectors_document, ChainDetails, ChainFamily, ChainIdentifier, FamilyTable,
        RegistryEntry, Selector, SelectorTables,
    },
    repositories::error::RepositoryError,
};

/// Production selector tables, embedded at build time
const PRODUCTION_SELECTORS: &str = include_str!("../../data/selectors.yml");

/// Test-network selector tables, embedded at build time
const TEST_SELECTORS: &str = include_str!("../../data/test_selectors.yml");

lazy_static! {
    static ref COMPILED_IN: StaticTableStore = StaticTableStore::compiled_in();
}

/// The compiled-in ground truth of the registry
///
/// Holds the merged production and test-network tables for every family,
/// plus a derived selector-to-entry reverse map. Built once per process and
/// immutable afterwards; construction failure means the embedded data itself
/// is defective and aborts the process.
pub struct StaticTableStore {
    tables: SelectorTables,
    test_tables: SelectorTables,
    by_selector: HashMap<Selector, RegistryEntry>,
}

impl StaticTableStore {
    /// The process-wide store parsed from the embedded documents
    pub fn shared() -> &'static StaticTableStore {
        &COMPILED_IN
    }

    fn compiled_in() -> Self {
        match Self::try_new(PRODUCTION_SELECTORS, TEST_SELECTORS) {
            Ok(store) => store,
            Err(e) => panic!("corrupt compiled-in selector tables: {}", e),
        }
    }

    /// Builds a store from a production and a test-network selector document
    ///
    /// Fails when either document does not parse or validate, when the two
    /// documents define the same chain identifier within one family, or when
    /// two entries share a selector.
    pub fn try_new(production: &str, test: &str) -> Result<Self, RepositoryError> {
        let production_tables = parse_selectors_document(production)
            .map_err(|e| RepositoryError::load_error(format!("production tables: {}", e)))?;
        let test_tables = parse_selectors_document(test)
            .map_err(|e| RepositoryError::load_error(format!("test tables: {}", e)))?;

        let mut tables = production_tables;
        for (family, test_table) in &test_tables {
            let merged = tables.entry(*family).or_default();
            for (chain_id, details) in test_table {
                if merged.contains_key(chain_id) {
                    return Err(RepositoryError::validation_error(format!(
                        "chain {} in family {} is defined in both the production and test tables",
                        chain_id, family
                    )));
                }
                merged.insert(chain_id.clone(), details.clone());
            }
        }

        let mut by_selector = HashMap::new();
        for (family, table) in &tables {
            for (chain_id, details) in table {
                let entry = RegistryEntry {
                    family: *family,
                    chain_id: chain_id.clone(),
                    details: details.clone(),
                };
                if let Some(existing) =
                    by_selector.insert(details.selector, entry)
                {
                    return Err(RepositoryError::validation_error(format!(
                        "selector {} is shared by {}/{} and {}/{}",
                        details.selector, existing.family, existing.chain_id, family, chain_id
                    )));
                }
            }
        }

        Ok(StaticTableStore {
            tables,
            test_tables,
            by_selector,
        })
    }

    /// Looks up the details of a chain in the merged tables
    pub fn details(
        &self,
        family: ChainFamily,
        chain_id: &ChainIdentifier,
    ) -> Option<&ChainDetails> {
        self.tables.get(&family)?.get(chain_id)
    }

    /// Resolves a selector to its owning entry
    pub fn entry_by_selector(&self, selector: Selector) -> Option<&RegistryEntry> {
        self.by_selector.get(&selector)
    }

    /// Whether the merged tables define the given chain
    pub fn contains(&self, family: ChainFamily, chain_id: &ChainIdentifier) -> bool {
        self.details(family, chain_id).is_some()
    }

    /// The merged table of one family
    pub fn family_table(&self, family: ChainFamily) -> Option<&FamilyTable> {
        self.tables.get(&family)
    }

    /// All merged tables, for invariant checks
    pub fn tables(&self) -> &SelectorTables {
        &self.tables
    }

    /// Chain identifiers defined only by the test-network table of a family
    pub fn test_chain_ids(&self, family: ChainFamily) -> Vec<ChainIdentifier> {
        self.test_tables
            .get(&family)
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default()
    }
}
