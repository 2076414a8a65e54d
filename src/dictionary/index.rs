//! Normalized-key index over dictionary entries.
//!
//! Every entry is registered under the normalized form of its word and,
//! when the word carries parenthetical annotations, under the normalized
//! form with those annotations removed. Several entries may share a key;
//! they keep their dataset order. Single words of multi-word entries are
//! not registered on their own, so `"ADA TAVŞANI"` is never reachable
//! through `"ada"`.
//!
//! The index is immutable once built and can be shared between threads
//! (behind an `Arc`, or by reference) without locking. Its folded view is
//! computed on first use and cached for the lifetime of the index.

use std::path::Path;
use std::sync::OnceLock;

use ahash::AHashMap;

use crate::analysis::normalizer::{fold, normalize, strip_parentheticals};
use crate::dictionary::entry::DictionaryEntry;
use crate::dictionary::folded::FoldedIndex;
use crate::dictionary::loader::load_dataset;
use crate::error::Result;

/// Default number of words returned by [`DictionaryIndex::search_symbols`].
pub const DEFAULT_SYMBOL_LIMIT: usize = 20;

/// Mapping from normalized keys to dictionary entries.
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    /// All entries, in dataset order.
    entries: Vec<DictionaryEntry>,
    /// Normalized keys in first-insertion order.
    keys: Vec<String>,
    /// Entry ids registered under each key (parallel to `keys`).
    postings: Vec<Vec<usize>>,
    /// Key -> position in `keys`.
    slots: AHashMap<String, usize>,
    /// Distinct words, sorted.
    unique_words: Vec<String>,
    /// Lazily built folded view.
    folded: OnceLock<FoldedIndex>,
}

impl DictionaryIndex {
    /// Build an index over `entries`.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut index = DictionaryIndex::default();

        for entry in entries {
            let id = index.entries.len();
            for key in Self::keys_for(&entry.word) {
                index.register(key, id);
            }
            index.entries.push(entry);
        }

        let mut words: Vec<String> = index.entries.iter().map(|e| e.word.clone()).collect();
        words.sort();
        words.dedup();
        index.unique_words = words;

        log::debug!(
            "built dictionary index: {} entries, {} keys",
            index.entries.len(),
            index.keys.len()
        );

        index
    }

    /// Load the dataset at `path` and index it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::build(load_dataset(path)?))
    }

    /// Normalized keys a word is registered under.
    pub fn keys_for(word: &str) -> Vec<String> {
        let mut keys = Vec::with_capacity(2);

        let key = normalize(word);
        if !key.is_empty() {
            keys.push(key);
        }

        let stripped = strip_parentheticals(word);
        if stripped != word {
            let key = normalize(&stripped);
            if !key.is_empty() && !keys.contains(&key) {
                keys.push(key);
            }
        }

        keys
    }

    fn register(&mut self, key: String, id: usize) {
        match self.slots.get(&key) {
            Some(&slot) => self.postings[slot].push(id),
            None => {
                self.slots.insert(key.clone(), self.keys.len());
                self.keys.push(key);
                self.postings.push(vec![id]);
            }
        }
    }

    /// Entries registered under a normalized key, in insertion order.
    pub fn get(&self, key: &str) -> Vec<&DictionaryEntry> {
        self.slots
            .get(key)
            .map(|&slot| self.resolve(&self.postings[slot]))
            .unwrap_or_default()
    }

    /// Resolve entry ids to entries.
    pub fn resolve(&self, ids: &[usize]) -> Vec<&DictionaryEntry> {
        ids.iter().filter_map(|&id| self.entries.get(id)).collect()
    }

    /// Keys with their entry ids, in first-insertion order.
    pub fn iter_keys(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.keys
            .iter()
            .zip(self.postings.iter())
            .map(|(k, ids)| (k.as_str(), ids.as_slice()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Number of distinct normalized keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All entries in dataset order.
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Distinct words, sorted.
    pub fn unique_words(&self) -> &[String] {
        &self.unique_words
    }

    /// The folded view of this index, built on first call.
    pub fn folded(&self) -> &FoldedIndex {
        self.folded.get_or_init(|| FoldedIndex::from_index(self))
    }

    /// Words whose folded form contains the folded `query`, in sorted order.
    ///
    /// A query that folds to the empty string matches every word.
    pub fn search_symbols(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = fold(query);
        self.unique_words
            .iter()
            .filter(|w| needle.is_empty() || fold(w).contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}
