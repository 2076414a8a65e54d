//! Dictionary matching of free-form text.
//!
//! A match call runs in two stages:
//!
//! ```text
//! text ─▶ normalize ─▶ fold ─▶ tokens ─▶ n-grams ∪ stems ∪ synonyms   (CandidateSet)
//!                                                   │
//!                          phrase_matches: folded keys, longest first, ∈ candidates
//!                                                   │ nothing found?
//!                          substring_matches: single-word keys inside the folded text
//! ```
//!
//! The second stage only runs when the first produced nothing. Results are
//! ordered by descending phrase length of the matching key; within a length
//! tier they follow the index's key order.
//!
//! # Examples
//!
//! ```
//! use ruya::dictionary::{DictionaryEntry, DictionaryIndex};
//! use ruya::matcher::find_matches;
//!
//! let index = DictionaryIndex::build(vec![
//!     DictionaryEntry::new("ADA TAVŞANI", "Çekingen bir dosttur."),
//!     DictionaryEntry::new("DENİZ", "Devlete işarettir."),
//! ]);
//!
//! let matches = find_matches("Rüyamda denizde ada tavşanı gördüm", &index, 5);
//! assert_eq!(matches[0].word, "ADA TAVŞANI");
//! ```

pub mod candidate;
pub mod config;
pub mod match_set;

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, LazyLock};

use regex::Regex;

pub use candidate::{CandidateSet, ngrams};
pub use config::{DEFAULT_MAX_PHRASE_LEN, MatcherConfig};
pub use match_set::{Match, MatchSet};

use crate::analysis::normalizer::{fold, normalize};
use crate::analysis::stemmer::{Stemmer, TurkishStemmer};
use crate::analysis::synonym::SynonymTable;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::dictionary::index::DictionaryIndex;
use crate::error::Result;

/// "<word> gibi hisset..." ("to feel like <word>"), on normalized text.
const SIMILATIVE_PATTERN: &str = r"(?i)([A-Za-z0-9_çğıöşüâîûÇĞİÖŞÜ]+)\s+gibi\s+hisset";

static SIMILATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SIMILATIVE_PATTERN).expect("similative pattern should be valid"));

/// The word compared in a similative construct, if the text has one.
pub fn extract_similative(normalized: &str) -> Option<String> {
    SIMILATIVE
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Stage one: every folded key present among the candidates, longest first.
pub fn phrase_matches(
    candidates: &CandidateSet,
    index: &DictionaryIndex,
    config: &MatcherConfig,
    out: &mut MatchSet,
) {
    for key in index.folded().ranked() {
        if key.word_count > config.max_phrase_len || key.char_len < config.min_key_chars {
            continue;
        }
        if candidates.contains(&key.key) {
            for entry in index.resolve(&key.entries) {
                out.push(entry);
            }
        }
    }
}

/// Stage two: single-word keys occurring anywhere inside the folded text.
pub fn substring_matches(
    folded_text: &str,
    index: &DictionaryIndex,
    config: &MatcherConfig,
    out: &mut MatchSet,
) {
    for key in index.folded().ranked() {
        if key.word_count != 1 || key.char_len < config.fallback_min_key_chars {
            continue;
        }
        if folded_text.contains(key.key.as_str()) {
            for entry in index.resolve(&key.entries) {
                out.push(entry);
            }
        }
    }
}

/// Matches text against a [`DictionaryIndex`].
///
/// A matcher holds no per-call state and can be shared between threads.
#[derive(Clone)]
pub struct Matcher {
    config: MatcherConfig,
    tokenizer: RegexTokenizer,
    stemmer: Arc<dyn Stemmer>,
    synonyms: SynonymTable,
}

impl Matcher {
    /// Matcher with the default configuration, stemmer and synonym table.
    pub fn new() -> Self {
        Matcher {
            config: MatcherConfig::default(),
            tokenizer: RegexTokenizer::default(),
            stemmer: Arc::new(TurkishStemmer::new()),
            synonyms: SynonymTable::new(),
        }
    }

    /// Matcher with a custom configuration.
    pub fn with_config(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Matcher {
            config,
            ..Self::new()
        })
    }

    /// Replace the synonym table.
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Replace the stemmer.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Build the candidate set for `text`.
    pub fn candidates(&self, text: &str) -> CandidateSet {
        let normalized = normalize(text);
        let similative = extract_similative(&normalized);
        let folded = fold(&normalized);

        let mut tokens: Vec<String> = self.tokenizer.tokenize(&folded).map(|t| t.text).collect();
        if let Some(word) = &similative {
            tokens.push(fold(word));
        }

        let grams = ngrams(&tokens, self.config.max_phrase_len);

        let mut stems: Vec<String> = tokens
            .iter()
            .flat_map(|t| self.stemmer.candidates(t))
            .collect();
        stems.sort();
        stems.dedup();

        let mut set = CandidateSet::new(normalized, folded, tokens, similative);
        set.add_ngrams(grams);
        set.add_stems(stems);

        let mut synonyms: Vec<String> = set
            .iter()
            .filter_map(|c| self.synonyms.get(c))
            .flatten()
            .cloned()
            .collect();
        synonyms.sort();
        synonyms.dedup();
        set.add_synonyms(synonyms);

        set
    }

    /// Dictionary entries referred to by `text`, longest phrases first and
    /// without duplicate `(word, meaning)` pairs.
    pub fn find_matches(&self, text: &str, index: &DictionaryIndex) -> Vec<Match> {
        let candidates = self.candidates(text);
        let mut out = MatchSet::new();

        phrase_matches(&candidates, index, &self.config, &mut out);
        if out.is_empty() {
            substring_matches(&candidates.folded, index, &self.config, &mut out);
            if !out.is_empty() {
                log::debug!("substring fallback produced {} matches", out.len());
            }
        }

        log::debug!(
            "{} tokens, {} candidates, {} matches",
            candidates.tokens.len(),
            candidates.len(),
            out.len()
        );

        out.into_vec()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Matcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("config", &self.config)
            .field("stemmer", &self.stemmer.name())
            .field("synonyms", &self.synonyms.len())
            .finish()
    }
}

/// Match `text` with the default matcher and the given phrase length limit.
///
/// A limit of 0 is treated as 1.
pub fn find_matches(text: &str, index: &DictionaryIndex, max_phrase_len: usize) -> Vec<Match> {
    let config = MatcherConfig::with_max_phrase_len(max_phrase_len.max(1));
    Matcher {
        config,
        ..Matcher::new()
    }
    .find_matches(text, index)
}
