//! Candidate generation: the set of folded strings looked up per query.

use ahash::AHashSet;
use serde::Serialize;

/// Contiguous n-grams of `tokens`, from `min(max_len, tokens.len())` words
/// down to single words, each tier left to right.
pub fn ngrams(tokens: &[String], max_len: usize) -> Vec<String> {
    let mut out = Vec::new();
    for n in (1..=max_len.min(tokens.len())).rev() {
        out.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    out
}

/// Every string one match call looks up, with the stages that produced it.
///
/// Built by [`Matcher::candidates`](crate::matcher::Matcher::candidates) and
/// discarded after the call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CandidateSet {
    /// The normalized input text.
    pub normalized: String,
    /// The folded input text; the haystack of the substring fallback.
    pub folded: String,
    /// Folded tokens, including the similative word when one was found.
    pub tokens: Vec<String>,
    /// Word captured from a "... gibi hisset..." construct.
    pub similative: Option<String>,
    /// N-grams, longest first.
    pub ngrams: Vec<String>,
    /// Stem candidates of every token.
    pub stems: Vec<String>,
    /// Equivalents added by synonym expansion.
    pub synonyms: Vec<String>,
    #[serde(skip)]
    lookup: AHashSet<String>,
}

impl CandidateSet {
    pub(crate) fn new(
        normalized: String,
        folded: String,
        tokens: Vec<String>,
        similative: Option<String>,
    ) -> Self {
        CandidateSet {
            normalized,
            folded,
            tokens,
            similative,
            ..Default::default()
        }
    }

    pub(crate) fn add_ngrams(&mut self, ngrams: Vec<String>) {
        self.lookup.extend(ngrams.iter().cloned());
        self.ngrams = ngrams;
    }

    pub(crate) fn add_stems(&mut self, stems: Vec<String>) {
        self.lookup.extend(stems.iter().cloned());
        self.stems = stems;
    }

    pub(crate) fn add_synonyms(&mut self, synonyms: Vec<String>) {
        self.lookup.extend(synonyms.iter().cloned());
        self.synonyms = synonyms;
    }

    /// Whether `key` is one of the candidates.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup.contains(key)
    }

    /// Distinct candidates in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lookup.iter().map(String::as_str)
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
