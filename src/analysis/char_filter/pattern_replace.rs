use regex::Regex;

use super::CharFilter;
use crate::error::{Result, RuyaError};

/// A char filter that replaces every match of a regex pattern.
#[derive(Debug, Clone)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    ///
    /// The replacement is inserted literally; `$` group references are not
    /// expanded.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| RuyaError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }

    /// Filter collapsing any run of Unicode whitespace into a single ASCII space.
    pub fn collapse_whitespace() -> Result<Self> {
        Self::new(r"\s+", " ")
    }

    /// Filter removing parenthetical annotations together with the
    /// whitespace that precedes them.
    pub fn parentheticals() -> Result<Self> {
        Self::new(r"\s*\([^)]*\)", "")
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"(\d+)", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_replacement_is_literal() {
        let filter = PatternReplaceCharFilter::new(r"x", "$1").unwrap();
        assert_eq!(filter.filter("axb"), "a$1b");
    }

    #[test]
    fn test_collapse_whitespace() {
        let filter = PatternReplaceCharFilter::collapse_whitespace().unwrap();
        assert_eq!(filter.filter("yılan\n\t ve   deniz"), "yılan ve deniz");
    }

    #[test]
    fn test_parentheticals() {
        let filter = PatternReplaceCharFilter::parentheticals().unwrap();
        assert_eq!(filter.filter("ACVE (Acve hurması)"), "ACVE");
        assert_eq!(filter.filter("a (b) c (d)"), "a c");
        // Unbalanced parentheses are left alone
        assert_eq!(filter.filter("ay (dolunay"), "ay (dolunay");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternReplaceCharFilter::new(r"(", "").is_err());
    }
}
