//! # Ruya
//!
//! Dream interpretation for Turkish narratives, backed by a symbol
//! dictionary.
//!
//! ## Features
//!
//! - Unicode-aware normalization and diacritic-insensitive Turkish folding
//! - Heuristic suffix stripping with synthesized infinitives
//! - Longest-phrase-first dictionary matching with synonym expansion
//! - Keyword-based sentiment hints and templated interpretations
//!
//! ```
//! use ruya::dictionary::{DictionaryEntry, DictionaryIndex};
//! use ruya::interpretation::{InterpretConfig, interpret};
//! use ruya::matcher::Matcher;
//!
//! let index = DictionaryIndex::build(vec![
//!     DictionaryEntry::new("YILAN", "Düşmana işarettir."),
//! ]);
//!
//! let matches = Matcher::new().find_matches("Rüyamda yılanlar gördüm", &index);
//! let result = interpret(&matches, &InterpretConfig::default());
//! assert_eq!(result.items[0].word, "YILAN");
//! ```

pub mod analysis;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod interpretation;
pub mod matcher;

pub mod prelude {
    pub use crate::analysis::{Sentiment, fold, normalize, sentiment_hint};
    pub use crate::dictionary::{DictionaryEntry, DictionaryIndex, load_dataset, parse_dataset};
    pub use crate::error::{Result, RuyaError};
    pub use crate::interpretation::{InterpretConfig, Interpretation, Length, interpret};
    pub use crate::matcher::{Match, Matcher, MatcherConfig, find_matches};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
