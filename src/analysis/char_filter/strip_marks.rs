use unicode_normalization::char::is_combining_mark;

use super::CharFilter;

/// A char filter that drops combining marks.
///
/// Run it on NFD text: precomposed letters only lose their accents once
/// they have been decomposed into base letter plus mark.
#[derive(Clone, Copy, Debug, Default)]
pub struct StripMarksCharFilter;

impl StripMarksCharFilter {
    pub fn new() -> Self {
        StripMarksCharFilter
    }
}

impl CharFilter for StripMarksCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|&c| !is_combining_mark(c)).collect()
    }

    fn name(&self) -> &'static str {
        "strip_marks"
    }
}
