//! Synonym equivalence table used during candidate expansion.
//!
//! Unlike a symmetric synonym group, each entry is directional: a folded
//! surface form maps to the folded forms that should be looked up in its
//! place. Expanding `"savasmak"` adds `"savas"`, not the other way round.
//!
//! Extra entries can be loaded from a JSON object:
//!
//! ```json
//! {
//!   "öpüşmek": ["öpmek"],
//!   "kavga etmek": ["kavga"]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ahash::AHashMap;

use crate::analysis::normalizer::fold;
use crate::error::{Result, RuyaError};

/// Built-in equivalences, already folded.
pub const DEFAULT_EQUIVALENCES: &[(&str, &[&str])] = &[
    // öpüşmek -> öpmek
    ("opusmek", &["opmek"]),
    // savaşmak -> savaş
    ("savasmak", &["savas"]),
    // kavga etmek -> kavga
    ("kavga etmek", &["kavga"]),
];

/// Directional map from folded surface forms to folded equivalents.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: AHashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        SynonymTable::default()
    }

    /// Create the table with the built-in equivalences.
    pub fn new() -> Self {
        Self::from_pairs(
            DEFAULT_EQUIVALENCES
                .iter()
                .map(|(surface, equivalents)| (*surface, equivalents.iter().copied())),
        )
    }

    /// Build a table from `(surface, equivalents)` pairs in any spelling.
    ///
    /// Keys and values are folded; values that fold to the empty string or
    /// to the key itself are dropped.
    pub fn from_pairs<I, K, V, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = SynonymTable::empty();
        for (surface, equivalents) in pairs {
            table.insert(surface.as_ref(), equivalents);
        }
        table
    }

    /// Load a table from a JSON object file of `surface -> [equivalent, ...]`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuyaError::analysis(format!(
                "Failed to read synonym file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Sorted so that surfaces folding to the same key merge in a fixed order
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            RuyaError::analysis(format!(
                "Failed to parse synonym JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let table = Self::from_pairs(raw);
        log::debug!(
            "loaded {} synonym entries from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Add equivalents for a surface form, appending to any existing entry.
    pub fn insert<V, S>(&mut self, surface: &str, equivalents: V)
    where
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = fold(surface);
        if key.is_empty() {
            return;
        }

        let slot = self.entries.entry(key.clone()).or_default();
        for equivalent in equivalents {
            let value = fold(equivalent.as_ref());
            if !value.is_empty() && value != key && !slot.contains(&value) {
                slot.push(value);
            }
        }
        if slot.is_empty() {
            self.entries.remove(&key);
        }
    }

    /// Merge another table into this one.
    pub fn merge(&mut self, other: SynonymTable) {
        let mut pairs: Vec<(String, Vec<String>)> = other.entries.into_iter().collect();
        pairs.sort();
        for (surface, equivalents) in pairs {
            self.insert(&surface, equivalents);
        }
    }

    /// Equivalents registered for a folded surface form.
    pub fn get(&self, surface: &str) -> Option<&[String]> {
        self.entries.get(surface).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
