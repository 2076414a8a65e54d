//! Heuristic Turkish stemming.
//!
//! The stemmer does not analyse morphology. It strips a fixed table of common
//! verbal and plural endings and synthesises infinitives, yielding a small
//! set of lookup keys per token. False stems are expected; the matcher only
//! uses them as extra candidates.
//!
//! ```text
//! savasiyormus ─┬─ savasiyormus, savasiyormusmak   (token itself)
//!               ├─ savasi, savasimek               (-yormus stripped)
//!               └─ savas, savasmak                 (progressive vowel drop)
//! ```

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::analysis::normalizer::fold;

/// Endings stripped from tokens, in surface spelling. They are folded and
/// ordered longest first when a stemmer is built.
pub const TURKISH_SUFFIXES: &[&str] = &[
    "yormuş", "yordu", "yorsun", "yorum", "yorsam", "yorsak", "yorm", "miş", "mış", "muş", "müş",
    "eceğim", "acağım", "ecek", "acak", "dik", "dık", "duk", "dük", "tik", "tık", "tuk", "tük",
    "dim", "dım", "dum", "düm", "tim", "tım", "tum", "tüm", "sin", "sın", "sun", "sün", "siniz",
    "sınız", "sunuz", "sünüz", "ler", "lar", "yor",
];

/// Present progressive marker; a vowel left in front of it is dropped too.
const PROGRESSIVE_MARKER: &str = "yor";

/// Infinitive endings, folded.
const INFINITIVE_MARKERS: [&str; 2] = ["mak", "mek"];

const BACK_VOWELS: &[char] = &['a', 'ı', 'o', 'u'];
const FRONT_VOWELS: &[char] = &['e', 'i', 'ö', 'ü'];

/// Candidates shorter than this many characters are discarded.
const MIN_CANDIDATE_CHARS: usize = 2;

/// Trait for stemming algorithms producing lookup candidates.
pub trait Stemmer: Send + Sync {
    /// Candidate stems and infinitives for an already folded token,
    /// sorted and free of duplicates.
    fn candidates(&self, token: &str) -> Vec<String>;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

fn is_vowel(c: char) -> bool {
    BACK_VOWELS.contains(&c) || FRONT_VOWELS.contains(&c)
}

fn ends_with_infinitive(s: &str) -> bool {
    INFINITIVE_MARKERS.iter().any(|m| s.ends_with(*m))
}

/// Infinitive ending chosen by vowel harmony with the last vowel of `stem`.
///
/// Back vowels select `mak`, front vowels `mek`; a stem without vowels
/// defaults to `mak`.
pub fn infinitive_suffix(stem: &str) -> &'static str {
    match stem.chars().rev().find(|&c| is_vowel(c)) {
        Some(v) if FRONT_VOWELS.contains(&v) => "mek",
        _ => "mak",
    }
}

/// Suffix-stripping stemmer for Turkish.
#[derive(Debug, Clone)]
pub struct TurkishStemmer {
    /// Folded suffixes, longest first.
    suffixes: Vec<String>,
}

impl TurkishStemmer {
    /// Create a stemmer with the built-in suffix table.
    pub fn new() -> Self {
        Self::with_suffixes(TURKISH_SUFFIXES.iter().copied())
    }

    /// Create a stemmer with custom suffixes (in any spelling; they are folded).
    pub fn with_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folded: BTreeSet<String> = suffixes
            .into_iter()
            .map(|s| fold(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        let mut suffixes: Vec<String> = folded.into_iter().collect();
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));

        TurkishStemmer { suffixes }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for TurkishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for TurkishStemmer {
    fn candidates(&self, token: &str) -> Vec<String> {
        let mut out: BTreeSet<String> = BTreeSet::new();
        out.insert(token.to_string());

        for suffix in &self.suffixes {
            let Some(base) = token.strip_suffix(suffix.as_str()) else {
                continue;
            };
            out.insert(base.to_string());

            if suffix.starts_with(PROGRESSIVE_MARKER)
                && let Some(last) = base.chars().last()
                && is_vowel(last)
            {
                out.insert(base[..base.len() - last.len_utf8()].to_string());
            }
        }

        let roots: Vec<String> = out
            .iter()
            .filter_map(|c| {
                INFINITIVE_MARKERS
                    .iter()
                    .find_map(|m| c.strip_suffix(*m))
                    .map(str::to_string)
            })
            .collect();
        out.extend(roots);

        out.retain(|c| c.chars().count() >= MIN_CANDIDATE_CHARS);

        let infinitives: Vec<String> = out
            .iter()
            .filter(|c| !ends_with_infinitive(c))
            .map(|c| format!("{c}{}", infinitive_suffix(c)))
            .collect();
        out.extend(infinitives);

        out.iter()
            .map(|c| fold(c))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn name(&self) -> &'static str {
        "turkish"
    }
}

/// Stem candidates of a folded token using the built-in suffix table.
pub fn stem_candidates(token: &str) -> Vec<String> {
    DEFAULT_STEMMER.candidates(token)
}

static DEFAULT_STEMMER: LazyLock<TurkishStemmer> = LazyLock::new(TurkishStemmer::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_table_is_folded_and_sorted() {
        let stemmer = TurkishStemmer::new();
        let suffixes = stemmer.suffixes();

        assert!(suffixes.iter().all(|s| s.is_ascii()));
        assert!(suffixes.windows(2).all(|w| w[0].len() >= w[1].len()));
        assert_eq!(suffixes[0].len(), 6);
        // "miş" and "mış" collapse to one folded entry
        assert_eq!(suffixes.iter().filter(|s| s.as_str() == "mis").count(), 1);
    }

    #[test]
    fn test_progressive_vowel_drop() {
        let candidates = stem_candidates("savasiyormus");

        assert!(candidates.contains(&"savasiyormus".to_string()));
        assert!(candidates.contains(&"savasi".to_string()));
        assert!(candidates.contains(&"savas".to_string()));
        assert!(candidates.contains(&"savasmak".to_string()));
    }

    #[test]
    fn test_past_progressive() {
        let candidates = stem_candidates("savasiyordu");
        assert!(candidates.contains(&"savas".to_string()));
        assert!(candidates.contains(&"savasmak".to_string()));
    }

    #[test]
    fn test_front_vowel_infinitive() {
        let candidates = stem_candidates("geliyordu");
        assert!(candidates.contains(&"gel".to_string()));
        assert!(candidates.contains(&"gelmek".to_string()));
        assert!(!candidates.contains(&"gelmak".to_string()));
    }

    #[test]
    fn test_infinitive_root() {
        let candidates = stem_candidates("opusmek");
        assert!(candidates.contains(&"opusmek".to_string()));
        assert!(candidates.contains(&"opus".to_string()));
        // Already an infinitive; no second ending appended
        assert!(!candidates.contains(&"opusmekmek".to_string()));
    }

    #[test]
    fn test_plural() {
        let candidates = stem_candidates("kediler");
        assert!(candidates.contains(&"kedi".to_string()));
        assert!(candidates.contains(&"kedimek".to_string()));
    }

    #[test]
    fn test_short_candidates_discarded() {
        // Stripping "yor" from "oyor" leaves "o", and the vowel drop leaves ""
        let candidates = stem_candidates("oyor");
        assert!(candidates.iter().all(|c| c.chars().count() >= 2));
        assert!(candidates.contains(&"oyor".to_string()));
    }

    #[test]
    fn test_candidates_sorted_and_unique() {
        let candidates = stem_candidates("gidiyorsun");
        let mut sorted = candidates.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(candidates, sorted);
    }

    #[test]
    fn test_infinitive_suffix() {
        assert_eq!(infinitive_suffix("savas"), "mak");
        assert_eq!(infinitive_suffix("gel"), "mek");
        assert_eq!(infinitive_suffix("kork"), "mak");
        assert_eq!(infinitive_suffix("gör"), "mek");
        assert_eq!(infinitive_suffix("xyz"), "mak");
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(TurkishStemmer::new().name(), "turkish");
    }
}
