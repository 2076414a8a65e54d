//! Unicode normalization as a char filter.
//!
//! Folding needs three forms in sequence: NFKC to merge compatibility
//! characters (fullwidth letters, ligatures), NFD to split accented letters
//! before mark stripping, and NFC to recompose whatever survives.

use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm {
    NFC,
    NFD,
    NFKC,
    NFKD,
}

/// Normalizes text to one [`NormalizationForm`].
#[derive(Debug, Clone, Copy)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn nfc() -> Self {
        Self::new(NormalizationForm::NFC)
    }

    pub fn nfd() -> Self {
        Self::new(NormalizationForm::NFD)
    }

    pub fn nfkc() -> Self {
        Self::new(NormalizationForm::NFKC)
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        match self.form {
            NormalizationForm::NFC => out.extend(input.nfc()),
            NormalizationForm::NFD => out.extend(input.nfd()),
            NormalizationForm::NFKC => out.extend(input.nfkc()),
            NormalizationForm::NFKD => out.extend(input.nfkd()),
        }
        out
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}
