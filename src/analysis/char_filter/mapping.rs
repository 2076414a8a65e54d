use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{Result, RuyaError};

/// A char filter that replaces every occurrence of a source string with its
/// mapped replacement, preferring the longest source at each position.
#[derive(Debug, Clone)]
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Build a filter from `(source, replacement)` pairs.
    ///
    /// Empty sources are ignored. Pairs are sorted by source so the automaton
    /// does not depend on the caller's iteration order.
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        pairs.sort();
        pairs.dedup_by(|a, b| a.0 == b.0);

        let (keys, replacements): (Vec<String>, Vec<String>) = pairs.into_iter().unzip();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| RuyaError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    /// Number of source strings in the table.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_char_filter() {
        let filter = MappingCharFilter::new([("ş", "s"), ("ğ", "g")]).unwrap();
        assert_eq!(filter.filter("şeker dağ"), "seker dag");
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_mapping_expansion() {
        let filter = MappingCharFilter::new([("ß", "ss")]).unwrap();
        assert_eq!(filter.filter("straße"), "strasse");
    }

    #[test]
    fn test_mapping_deletion() {
        let filter = MappingCharFilter::new([("foo", "")]).unwrap();
        assert_eq!(filter.filter("afoob"), "ab");
    }

    #[test]
    fn test_mapping_overlap() {
        let filter = MappingCharFilter::new([("ab", "1"), ("abc", "2")]).unwrap();

        // "abc" should match "abc" -> "2" (longest match)
        assert_eq!(filter.filter("abc"), "2");
        assert_eq!(filter.filter("abd"), "1d");
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let filter = MappingCharFilter::new(Vec::<(String, String)>::new()).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter.filter("çiçek"), "çiçek");
    }
}
