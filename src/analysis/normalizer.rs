//! Text normalization and Turkish folding.
//!
//! Two char filter chains produce every string the matcher compares:
//!
//! ```text
//! normalize: trim → NFKC → case fold → collapse whitespace → trim
//! fold:      NFKC → case fold → Turkish letters → NFD → strip marks → NFC
//!            → collapse whitespace → trim
//! ```
//!
//! The normalized form is what dictionary keys are stored under; the folded
//! form is the comparison key for every lookup, so `"İSTANBUL"`,
//! `"istanbul"` and `"Istanbul"` all meet at `"istanbul"`.
//!
//! # Examples
//!
//! ```
//! use ruya::analysis::normalizer::{fold, normalize, strip_parentheticals};
//!
//! assert_eq!(normalize("  Rüyamda\n  YILAN  "), "rüyamda yilan");
//! assert_eq!(fold("Şeker Ağacı"), "seker agaci");
//! assert_eq!(strip_parentheticals("ACVE (Acve hurması)"), "ACVE");
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, LazyLock};

use crate::analysis::char_filter::{
    CaseFoldCharFilter, CharFilter, MappingCharFilter, PatternReplaceCharFilter,
    StripMarksCharFilter, UnicodeNormalizationCharFilter,
};
use crate::error::Result;

/// Turkish letters and their ASCII look-alikes. Upper and lower case sources
/// share one lowercase target.
pub const TURKISH_FOLDING_TABLE: &[(&str, &str)] = &[
    ("ı", "i"),
    ("İ", "i"),
    ("I", "i"),
    ("ş", "s"),
    ("Ş", "s"),
    ("ğ", "g"),
    ("Ğ", "g"),
    ("ç", "c"),
    ("Ç", "c"),
    ("ö", "o"),
    ("Ö", "o"),
    ("ü", "u"),
    ("Ü", "u"),
    ("â", "a"),
    ("î", "i"),
    ("û", "u"),
];

/// An ordered chain of char filters applied to whole strings.
#[derive(Clone)]
struct FilterChain {
    filters: Vec<Arc<dyn CharFilter>>,
}

impl FilterChain {
    fn new() -> Self {
        FilterChain {
            filters: Vec::new(),
        }
    }

    fn add(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    fn apply(&self, text: &str) -> String {
        self.filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc))
            .trim()
            .to_string()
    }

    fn names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl Debug for FilterChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Unicode normalizer producing dictionary keys.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    chain: FilterChain,
}

impl TextNormalizer {
    pub fn new() -> Result<Self> {
        let chain = FilterChain::new()
            .add(Arc::new(UnicodeNormalizationCharFilter::nfkc()))
            .add(Arc::new(CaseFoldCharFilter::new()))
            .add(Arc::new(PatternReplaceCharFilter::collapse_whitespace()?));

        Ok(TextNormalizer { chain })
    }

    /// Normalize `text`. Total: any string, including the empty one, is accepted.
    pub fn normalize(&self, text: &str) -> String {
        self.chain.apply(text.trim())
    }
}

/// Diacritic- and case-insensitive folding for Turkish text.
#[derive(Clone, Debug)]
pub struct TurkishFolder {
    chain: FilterChain,
}

impl TurkishFolder {
    pub fn new() -> Result<Self> {
        let chain = FilterChain::new()
            .add(Arc::new(UnicodeNormalizationCharFilter::nfkc()))
            .add(Arc::new(CaseFoldCharFilter::new()))
            .add(Arc::new(MappingCharFilter::new(
                TURKISH_FOLDING_TABLE.iter().copied(),
            )?))
            .add(Arc::new(UnicodeNormalizationCharFilter::nfd()))
            .add(Arc::new(StripMarksCharFilter::new()))
            .add(Arc::new(UnicodeNormalizationCharFilter::nfc()))
            .add(Arc::new(PatternReplaceCharFilter::collapse_whitespace()?));

        Ok(TurkishFolder { chain })
    }

    pub fn fold(&self, text: &str) -> String {
        self.chain.apply(text)
    }
}

static NORMALIZER: LazyLock<TextNormalizer> =
    LazyLock::new(|| TextNormalizer::new().expect("built-in normalizer filters should be valid"));

static FOLDER: LazyLock<TurkishFolder> =
    LazyLock::new(|| TurkishFolder::new().expect("built-in folding filters should be valid"));

static PARENTHETICALS: LazyLock<PatternReplaceCharFilter> = LazyLock::new(|| {
    PatternReplaceCharFilter::parentheticals().expect("parenthetical pattern should be valid")
});

/// Normalize text with the shared [`TextNormalizer`].
pub fn normalize(text: &str) -> String {
    NORMALIZER.normalize(text)
}

/// Fold text with the shared [`TurkishFolder`].
pub fn fold(text: &str) -> String {
    FOLDER.fold(text)
}

/// Remove every parenthetical annotation (and the whitespace before it).
pub fn strip_parentheticals(text: &str) -> String {
    PARENTHETICALS.filter(text).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace_and_case() {
        assert_eq!(normalize("  Rüyamda\n\n YILAN\tgördüm "), "rüyamda yilan gördüm");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_keeps_turkish_letters() {
        assert_eq!(normalize("ÇİÇEK"), "çi\u{0307}çek");
        assert_eq!(normalize("Ağaç"), "ağaç");
    }

    #[test]
    fn test_normalize_nfkc() {
        assert_eq!(normalize("\u{ff21}\u{ff22}"), "ab");
    }

    #[test]
    fn test_normalize_full_case_folding() {
        assert_eq!(normalize("\u{1fb3}"), "αι");
        assert_eq!(normalize("\u{1f0}"), "j\u{30c}");
        assert_eq!(normalize("STRAßE"), "strasse");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["İSTANBUL", "  Ada  TAVŞANI ", "Straße", "ﬁncan", "kahve (türk)"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s}");
        }
    }

    #[test]
    fn test_fold_turkish_letters() {
        assert_eq!(fold("şeker"), "seker");
        assert_eq!(fold("ığdır"), "igdir");
        assert_eq!(fold("ÇÖĞÜŞ"), "cogus");
        assert_eq!(fold("kâr îmân ûmur"), "kar iman umur");
    }

    #[test]
    fn test_fold_case_insensitive() {
        assert_eq!(fold("İSTANBUL"), fold("istanbul"));
        assert_eq!(fold("ISTANBUL"), "istanbul");
        assert_eq!(fold("ŞEKER"), fold("seker"));
    }

    #[test]
    fn test_fold_after_full_case_folding() {
        assert_eq!(fold("\u{1fb3}"), "αι");
        assert_eq!(fold("\u{345}"), "ι");
        assert_eq!(fold("\u{1f0}"), "j");
    }

    #[test]
    fn test_fold_strips_other_diacritics() {
        assert_eq!(fold("café naïve"), "cafe naive");
    }

    #[test]
    fn test_fold_leaves_ascii_alone() {
        assert_eq!(fold("abc-123_x, y."), "abc-123_x, y.");
    }

    #[test]
    fn test_fold_idempotent() {
        for s in ["İSTANBUL", "Ada Tavşanı", "savaşıyordum", "kâr", "  a \n b  ", ""] {
            let once = fold(s);
            assert_eq!(fold(&once), once, "input: {s}");
        }
    }

    #[test]
    fn test_strip_parentheticals() {
        assert_eq!(strip_parentheticals("ACVE (Acve hurması)"), "ACVE");
        assert_eq!(strip_parentheticals("AT (Beyaz) (Kır)"), "AT");
        assert_eq!(strip_parentheticals("(tek)"), "");
        assert_eq!(strip_parentheticals("yılan"), "yılan");
    }

    #[test]
    fn test_chain_names() {
        let folder = TurkishFolder::new().unwrap();
        assert_eq!(
            folder.chain.names(),
            vec![
                "unicode_normalization",
                "case_fold",
                "mapping",
                "unicode_normalization",
                "strip_marks",
                "unicode_normalization",
                "pattern_replace",
            ]
        );
    }
}
