//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Regex-based tokenization, Turkish words by default
//!
//! # Examples
//!
//! ```
//! use ruya::analysis::tokenizer::Tokenizer;
//! use ruya::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("rüyamda yılan, deniz!").collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].text, "yılan");
//! ```

use std::sync::LazyLock;

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by
/// concurrent matchers.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use self::regex::RegexTokenizer;

static DEFAULT_TOKENIZER: LazyLock<RegexTokenizer> = LazyLock::new(RegexTokenizer::default);

/// Split `text` into word tokens with the default Turkish word pattern.
///
/// Tokens come back in left-to-right order and are never empty.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text).map(|t| t.text).collect()
}
