//! Full Unicode case folding.
//!
//! `str::to_lowercase` implements the default lowercase mapping, which is
//! not the same as full case folding: `ß` stays `ß`, a word-final sigma
//! becomes `ς`, and iota subscripts are kept instead of expanding to `ι`.
//! The folding filter applies the full (`C` + `F`) mappings of
//! `CaseFolding.txt` so that strings differing only in case compare equal.
//!
//! The Turkish capital dotted `İ` folds to `i` followed by
//! `U+0307 COMBINING DOT ABOVE`; the Turkic-specific `T` mappings are not
//! applied.

use caseless::default_case_fold_str;

use super::CharFilter;

/// A char filter applying full Unicode case folding.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaseFoldCharFilter;

impl CaseFoldCharFilter {
    pub fn new() -> Self {
        CaseFoldCharFilter
    }
}

impl CharFilter for CaseFoldCharFilter {
    fn filter(&self, input: &str) -> String {
        default_case_fold_str(input)
    }

    fn name(&self) -> &'static str {
        "case_fold"
    }
}
