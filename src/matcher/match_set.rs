//! Ordered, duplicate-free accumulation of match results.

use ahash::{AHashSet, RandomState};

use crate::dictionary::entry::DictionaryEntry;

/// A matched `(word, meaning)` pair.
pub type Match = DictionaryEntry;

/// Ordered, duplicate-free collection of matches.
///
/// Identity is the word plus a hash of the meaning: the same word may
/// appear several times with different meanings, but a pair never appears
/// twice.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    matches: Vec<Match>,
    seen: AHashSet<(String, u64)>,
    hasher: RandomState,
}

impl MatchSet {
    pub fn new() -> Self {
        MatchSet::default()
    }

    /// Append `entry` unless the same pair is already present.
    ///
    /// Returns whether the entry was added.
    pub fn push(&mut self, entry: &DictionaryEntry) -> bool {
        let id = (entry.word.clone(), self.hasher.hash_one(&entry.meaning));
        if !self.seen.insert(id) {
            return false;
        }
        self.matches.push(entry.clone());
        true
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    pub fn into_vec(self) -> Vec<Match> {
        self.matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_skipped() {
        let mut set = MatchSet::new();
        assert!(set.push(&DictionaryEntry::new("YILAN", "Düşman.")));
        assert!(!set.push(&DictionaryEntry::new("YILAN", "Düşman.")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_same_word_different_meanings() {
        let mut set = MatchSet::new();
        assert!(set.push(&DictionaryEntry::new("YILAN", "Düşman.")));
        assert!(set.push(&DictionaryEntry::new("YILAN", "Hazine.")));
        assert!(set.push(&DictionaryEntry::new("Yılan", "Düşman.")));
        assert_eq!(set.len(), 3);

        let words: Vec<&str> = set.as_slice().iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["YILAN", "YILAN", "Yılan"]);
    }
}
