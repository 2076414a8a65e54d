//! Diacritic-insensitive view of a [`DictionaryIndex`].
//!
//! Each normalized key is folded; keys that collide after folding (for
//! example `"yilan"` and `"yılan"`) merge their entry lists in index order.
//! The view also precomputes the ranking the matcher walks: keys ordered by
//! descending word count, ties kept in first-insertion order.

use ahash::AHashMap;

use crate::analysis::normalizer::fold;
use crate::dictionary::index::DictionaryIndex;

/// A folded key with its merged entry ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedKey {
    pub key: String,
    /// Number of whitespace-separated words in `key`.
    pub word_count: usize,
    /// Length of `key` in characters.
    pub char_len: usize,
    /// Entry ids, concatenated from every normalized key that folds here.
    pub entries: Vec<usize>,
}

/// Mapping from folded keys to dictionary entry ids.
#[derive(Debug, Clone, Default)]
pub struct FoldedIndex {
    keys: Vec<FoldedKey>,
    slots: AHashMap<String, usize>,
    /// Positions in `keys`, longest phrases first.
    ranked: Vec<usize>,
}

impl FoldedIndex {
    /// Fold every key of `index`.
    pub fn from_index(index: &DictionaryIndex) -> Self {
        let mut folded = FoldedIndex::default();

        for (key, ids) in index.iter_keys() {
            let fk = fold(key);
            match folded.slots.get(&fk) {
                Some(&slot) => folded.keys[slot].entries.extend_from_slice(ids),
                None => {
                    folded.slots.insert(fk.clone(), folded.keys.len());
                    folded.keys.push(FoldedKey {
                        word_count: fk.split_whitespace().count(),
                        char_len: fk.chars().count(),
                        key: fk,
                        entries: ids.to_vec(),
                    });
                }
            }
        }

        let mut ranked: Vec<usize> = (0..folded.keys.len()).collect();
        ranked.sort_by_key(|&i| std::cmp::Reverse(folded.keys[i].word_count));
        folded.ranked = ranked;

        log::debug!(
            "folded {} normalized keys into {} folded keys",
            index.len(),
            folded.keys.len()
        );

        folded
    }

    pub fn get(&self, key: &str) -> Option<&FoldedKey> {
        self.slots.get(key).map(|&slot| &self.keys[slot])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Keys in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FoldedKey> {
        self.keys.iter()
    }

    /// Keys by descending word count; equal counts keep insertion order.
    pub fn ranked(&self) -> impl Iterator<Item = &FoldedKey> {
        self.ranked.iter().map(|&i| &self.keys[i])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
