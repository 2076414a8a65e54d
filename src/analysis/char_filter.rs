//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text string before it is tokenized or used
//! as a lookup key. The normalizer and the Turkish folder are both built as
//! ordered chains of these filters.
//!
//! # Available Filters
//!
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//! - [`case_fold::CaseFoldCharFilter`] - Full Unicode case folding
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`mapping::MappingCharFilter`] - Character mapping replacement
//! - [`strip_marks::StripMarksCharFilter`] - Removal of combining marks
//!
//! # Examples
//!
//! ```
//! use ruya::analysis::char_filter::CharFilter;
//! use ruya::analysis::char_filter::case_fold::CaseFoldCharFilter;
//!
//! let filter = CaseFoldCharFilter::new();
//! assert_eq!(filter.filter("Straße"), "strasse");
//! ```

/// Trait for character filters that transform text.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the rewritten text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod case_fold;
pub mod mapping;
pub mod pattern_replace;
pub mod strip_marks;
pub mod unicode_normalize;

pub use case_fold::CaseFoldCharFilter;
pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use strip_marks::StripMarksCharFilter;
pub use unicode_normalize::{NormalizationForm, UnicodeNormalizationCharFilter};
