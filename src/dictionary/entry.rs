use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(word, meaning)` pair from the symbol dataset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// The symbol as written in the dataset, e.g. `"ADA TAVŞANI"`.
    pub word: String,

    /// Interpretation of the symbol.
    pub meaning: String,
}

impl DictionaryEntry {
    pub fn new<W: Into<String>, M: Into<String>>(word: W, meaning: M) -> Self {
        DictionaryEntry {
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}

impl fmt::Display for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.meaning)
    }
}
