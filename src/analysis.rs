//! Text analysis module for Ruya.
//!
//! This module provides the building blocks the matcher composes: char
//! filters, the normalizer and Turkish folder, tokenization, heuristic
//! stemming, synonym expansion and the sentiment hint.

pub mod char_filter;
pub mod normalizer;
pub mod sentiment;
pub mod stemmer;
pub mod synonym;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use normalizer::{TextNormalizer, TurkishFolder, fold, normalize, strip_parentheticals};
pub use sentiment::{Sentiment, sentiment_hint};
pub use stemmer::{Stemmer, TurkishStemmer, stem_candidates};
pub use synonym::SynonymTable;
pub use token::{Token, TokenStream};
pub use tokenizer::{RegexTokenizer, Tokenizer, tokenize};
