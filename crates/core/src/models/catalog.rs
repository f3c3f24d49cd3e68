use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::region::Region;

/// One selectable ticker: a decorated display label tied to the
/// canonical symbol used when querying the market-data collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// User-facing label (region flag glyph + symbol).
    pub label: String,

    /// Exchange-recognized ticker string (e.g., "PETR4.SA", "AAPL").
    pub symbol: String,

    /// Region whose source table contributed this entry.
    pub region: Region,
}

/// The merged label → symbol mapping for all enabled regions.
///
/// Entries keep their load order. A duplicate label keeps the original
/// position and overwrites the symbol (dictionary-update semantics), so
/// reverse lookups resolve to the first region loaded. Rebuilt on every
/// region toggle, immutable between rebuilds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerCatalog {
    entries: Vec<CatalogEntry>,
    by_label: HashMap<String, usize>,
}

impl TickerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, overwriting in place if the label already exists.
    pub fn insert(&mut self, entry: CatalogEntry) {
        match self.by_label.get(&entry.label) {
            Some(&idx) => self.entries[idx] = entry,
            None => {
                self.by_label.insert(entry.label.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Merge a region's entries into the catalog, preserving load order.
    pub fn merge(&mut self, entries: Vec<CatalogEntry>) {
        for entry in entries {
            self.insert(entry);
        }
    }

    /// Canonical symbol for a display label.
    pub fn symbol_for(&self, label: &str) -> Option<&str> {
        self.by_label
            .get(label)
            .map(|&idx| self.entries[idx].symbol.as_str())
    }

    /// Reverse lookup: first label (in load order) mapping to `symbol`.
    pub fn label_for(&self, symbol: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.label.as_str())
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// All display labels in load order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// All entries in load order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
