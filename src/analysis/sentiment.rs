//! Keyword-based sentiment hint for dictionary meanings.
//!
//! A meaning is positive when it contains more distinct positive keywords
//! than negative ones, negative in the opposite case and mixed otherwise.
//! Matching is substring containment on the normalized text, so inflected
//! forms such as "bereketli" still count.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::normalize;

/// Positive keywords, in normalized spelling.
pub const POSITIVE_WORDS: &[&str] = &[
    "hayır",
    "hayra",
    "müjde",
    "sevinç",
    "ferah",
    "bereket",
    "rızık",
    "nimet",
    "afiyet",
    "şifa",
    "başarı",
    "muvaffakiyet",
    "izzet",
    "şeref",
    "refah",
];

/// Negative keywords, in normalized spelling.
pub const NEGATIVE_WORDS: &[&str] = &[
    "keder",
    "üzüntü",
    "musibet",
    "hastalık",
    "zarar",
    "kötü",
    "belâ",
    "tehlike",
    "kaygı",
    "sıkıntı",
    "düşman",
    "fitne",
    "yoksulluk",
    "hüzün",
    "felâket",
];

/// Sentiment classification of a meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "olumlu")]
    Positive,
    #[serde(rename = "olumsuz")]
    Negative,
    #[serde(rename = "nötr/karışık")]
    Neutral,
}

impl Sentiment {
    /// The Turkish label of this sentiment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "olumlu",
            Sentiment::Negative => "olumsuz",
            Sentiment::Neutral => "nötr/karışık",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn count_keywords(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|w| text.contains(*w)).count()
}

/// Classify a meaning string.
pub fn sentiment_hint(meaning: &str) -> Sentiment {
    let text = normalize(meaning);
    let pos = count_keywords(&text, POSITIVE_WORDS);
    let neg = count_keywords(&text, NEGATIVE_WORDS);

    if pos > neg && pos > 0 {
        Sentiment::Positive
    } else if neg > pos && neg > 0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
