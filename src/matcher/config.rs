//! Configuration for the matcher.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuyaError};

/// Default longest phrase, in words, that is looked up.
pub const DEFAULT_MAX_PHRASE_LEN: usize = 5;

/// Tuning knobs of [`Matcher`](crate::matcher::Matcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Longest n-gram generated from the input and longest dictionary key
    /// considered, in words.
    pub max_phrase_len: usize,

    /// Keys shorter than this many characters never match.
    pub min_key_chars: usize,

    /// Minimum length, in characters, of a single-word key for the
    /// substring fallback.
    pub fallback_min_key_chars: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_phrase_len: DEFAULT_MAX_PHRASE_LEN,
            min_key_chars: 2,
            fallback_min_key_chars: 4,
        }
    }
}

impl MatcherConfig {
    /// Default configuration with a different phrase length limit.
    pub fn with_max_phrase_len(max_phrase_len: usize) -> Self {
        Self {
            max_phrase_len,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_phrase_len == 0 {
            return Err(RuyaError::config("max_phrase_len must be at least 1"));
        }
        Ok(())
    }
}
