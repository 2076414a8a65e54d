//! Template-based interpretation of a match list.
//!
//! The renderer never looks at the narrated text itself. It takes the
//! ordered matches produced by the [`Matcher`](crate::matcher::Matcher), tags
//! each meaning with a [`Sentiment`], and fills fixed Turkish templates.
//!
//! # Examples
//!
//! ```
//! use ruya::dictionary::DictionaryEntry;
//! use ruya::interpretation::{InterpretConfig, Length, interpret, render_text};
//!
//! let matches = vec![DictionaryEntry::new("YILAN", "Düşmana işarettir.")];
//! let result = interpret(&matches, &InterpretConfig::new(Length::Short, 8));
//!
//! assert_eq!(result.items.len(), 1);
//! assert!(render_text(&result).contains("YILAN"));
//! ```

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::sentiment::{Sentiment, sentiment_hint};
use crate::matcher::Match;

/// Smallest accepted `top_k`.
pub const MIN_TOP_K: usize = 1;
/// Largest accepted `top_k`.
pub const MAX_TOP_K: usize = 20;
/// Default number of matches that make it into an interpretation.
pub const DEFAULT_TOP_K: usize = 8;

/// Number of distinct symbols named in the summary.
const SUMMARY_SYMBOLS: usize = 6;

const NO_MATCH_MESSAGE: &str = "Rüya anlatımında veri tabanımızdaki belirgin sembollere doğrudan bir eşleşme bulamadım. \
     Daha net anahtar kelimeler (örn. yılan, deniz, altın, koç vb.) içeren bir anlatım paylaşırsan, \
     daha isabetli ve detaylı bir yorum üretebilirim.";

const SUMMARY_TAIL: &str = "Bu semboller çoğunlukla niyetin, içsel hâlin ve yaklaşan gelişmelerin işaretleri olarak ele alınır.";

const SHORT_BODY: &str = "Sembollerin ortak anlamları bir araya getirildiğinde; mevcut dönemde niyetleri berraklaştırma, \
     yakın çevreyle iletişimi güçlendirme ve somut adımlar atma vurgusu öne çıkıyor.";

const MEDIUM_BODY: &str = "Bu rüya, bilinçaltının güncel kaygı ve beklentileri bir arada işlemesi gibi görünüyor. \
     Özellikle öne çıkan semboller; ilişkilerde denge kurma, fırsatları kaçırmama ve riskleri tedricen yönetme çağrısı yapıyor. \
     Bu süreçte sezgileri küçümsememek ve küçük sinyalleri ciddiye almak faydalı olacaktır.";

const LONG_BODY: &str = "Sembollerin kesişim kümesi; niyet temizliği, kaynağa dönme ve adım adım ilerleme fikrini işaret ediyor. \
     Rüya; maddi-manevi dengede kalmayı, aşırı uçlardan kaçınmayı ve ilişkilerde netlik aramayı öğütlüyor. \
     Gündelik düzlemde bu, planların yazılı hâle getirilmesi, küçük ama sürdürülebilir alışkanlıklar kurulması ve \
     duygusal refleksler tetiklendiğinde kısa bir durup nefesi düzenleme pratikleriyle desteklenebilir.";

const POSITIVE_TONE: &str = "Genel ton olumlu; fırsat ve açılımlar biraz daha baskın görünüyor.";
const NEGATIVE_TONE: &str = "Genel ton temkinli/olumsuz; riskleri fark edip koruyucu önlemler almak öne çıkıyor.";
const BALANCED_TONE: &str = "Genel ton dengeli; hem fırsat hem de dikkat gerektiren işaretler birlikte görünüyor.";

const RECOMMENDATIONS: [&str; 3] = [
    "Kısa vadeli (1-2 hafta) yapılabilir iki adım belirle.",
    "Duygusal yoğunlukta 3 derin nefes + 10 dakikalık yürüyüş gibi bir ara ritüel uygula.",
    "Bir cümlelik niyet yaz: ‘Şu konuda şu tarihe dek şu adımı atıyorum.’",
];

/// Detail level of the body text.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    #[default]
    Long,
}

impl Length {
    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            Length::Short => SHORT_BODY,
            Length::Medium => MEDIUM_BODY,
            Length::Long => LONG_BODY,
        }
    }
}

/// Unrecognised names select [`Length::Long`].
impl From<&str> for Length {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Length::Short,
            "medium" => Length::Medium,
            _ => Length::Long,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings of one [`interpret`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpretConfig {
    pub length: Length,
    /// Maximum number of matches used; always read through
    /// [`InterpretConfig::effective_top_k`].
    pub top_k: usize,
}

impl Default for InterpretConfig {
    fn default() -> Self {
        InterpretConfig {
            length: Length::Long,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl InterpretConfig {
    /// Create a config, clamping `top_k` into `1..=20`.
    pub fn new(length: Length, top_k: usize) -> Self {
        InterpretConfig {
            length,
            top_k: top_k.clamp(MIN_TOP_K, MAX_TOP_K),
        }
    }

    pub fn effective_top_k(&self) -> usize {
        self.top_k.clamp(MIN_TOP_K, MAX_TOP_K)
    }
}

/// One matched symbol in an interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationItem {
    pub word: String,
    pub hint: Sentiment,
    pub meaning: String,
}

/// Structured interpretation of a dream narrative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub summary: String,
    pub items: Vec<InterpretationItem>,
    pub body: String,
    pub tone: String,
    pub recommendations: Vec<String>,
}

impl Interpretation {
    /// The interpretation returned when nothing matched.
    pub fn no_match() -> Self {
        Interpretation {
            summary: NO_MATCH_MESSAGE.to_string(),
            items: Vec::new(),
            body: String::new(),
            tone: Sentiment::Neutral.to_string(),
            recommendations: Vec::new(),
        }
    }

    /// Whether no symbol contributed to this interpretation.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn summary(items: &[InterpretationItem]) -> String {
    let mut words: Vec<&str> = items.iter().map(|item| item.word.as_str()).collect();
    words.sort_by(|a, b| a.chars().count().cmp(&b.chars().count()).then(a.cmp(b)));
    words.dedup();
    words.truncate(SUMMARY_SYMBOLS);

    format!(
        "Rüyanın genel teması şu semboller etrafında şekilleniyor: {}. {SUMMARY_TAIL}",
        words.join(", ")
    )
}

fn tone(items: &[InterpretationItem]) -> &'static str {
    let count = |s: Sentiment| items.iter().filter(|item| item.hint == s).count();
    let pos = count(Sentiment::Positive);
    let neg = count(Sentiment::Negative);

    if pos > neg {
        POSITIVE_TONE
    } else if neg > pos {
        NEGATIVE_TONE
    } else {
        BALANCED_TONE
    }
}

/// Build an interpretation from the first `top_k` matches.
pub fn interpret(matches: &[Match], config: &InterpretConfig) -> Interpretation {
    if matches.is_empty() {
        return Interpretation::no_match();
    }

    let items: Vec<InterpretationItem> = matches
        .iter()
        .take(config.effective_top_k())
        .map(|m| InterpretationItem {
            word: m.word.clone(),
            hint: sentiment_hint(&m.meaning),
            meaning: m.meaning.clone(),
        })
        .collect();

    Interpretation {
        summary: summary(&items),
        body: config.length.body().to_string(),
        tone: tone(&items).to_string(),
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        items,
    }
}

fn section(out: &mut String, heading: &str, content: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.chars().count()));
    out.push('\n');
    out.push_str(content);
    out.push_str("\n\n");
}

/// Plain-text report of an interpretation.
///
/// An empty interpretation renders as its summary alone.
pub fn render_text(interpretation: &Interpretation) -> String {
    if interpretation.is_empty() {
        return interpretation.summary.clone();
    }

    let symbols = interpretation
        .items
        .iter()
        .map(|item| format!("- {}: ({}) {}", item.word, item.hint, item.meaning))
        .collect::<Vec<_>>()
        .join("\n");
    let recommendations = interpretation
        .recommendations
        .iter()
        .map(|r| format!("- {r}"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::from("RÜYA TABİRİ\n===========\n\n");
    section(&mut out, "Özet", &interpretation.summary);
    section(&mut out, "İlgili Semboller ve Anlamları", &symbols);
    section(&mut out, "Muhtemel Yorum", &interpretation.body);
    section(&mut out, "Genel Ton", &interpretation.tone);
    section(&mut out, "Öneriler", &recommendations);

    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}
