//! Integration tests for normalization, folding and dictionary matching

use std::collections::HashSet;

use ruya::analysis::stem_candidates;
use ruya::prelude::*;

fn dictionary() -> DictionaryIndex {
    DictionaryIndex::build(vec![
        DictionaryEntry::new("ADA TAVŞANI", "Çekingen bir dosta işarettir."),
        DictionaryEntry::new("TAVŞAN", "Korkaklığa işarettir."),
        DictionaryEntry::new("YILAN", "Düşmana işarettir."),
        DictionaryEntry::new("YILAN", "Düşmana işarettir."),
        DictionaryEntry::new("Yılan", "Gizli düşmana işarettir."),
        DictionaryEntry::new("DENİZ", "Devlete işarettir."),
        DictionaryEntry::new("SAVAŞ", "Sıkıntıdan kurtuluşa işarettir."),
        DictionaryEntry::new("ÖPMEK", "Muradına ermeye işarettir."),
        DictionaryEntry::new("ACVE (Acve hurması)", "Bereket ve şifaya işarettir."),
        DictionaryEntry::new("İSTANBUL", "Büyük bir işe işarettir."),
    ])
}

fn words(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.word.as_str()).collect()
}

#[test]
fn test_normalize_and_fold_are_idempotent() {
    let samples = [
        "",
        "   ",
        "Rüyamda  ADA TAVŞANI\n gördüm",
        "İSTANBUL'da ılık bir gün",
        "ACVE (Acve hurması)",
        "Straße ﬁnal",
        "âlem, îman, ûmran",
        "Ｒüya",
    ];

    for sample in samples {
        let n = normalize(sample);
        assert_eq!(normalize(&n), n, "normalize not idempotent for {sample:?}");

        let f = fold(sample);
        assert_eq!(fold(&f), f, "fold not idempotent for {sample:?}");
    }
}

#[test]
fn test_case_and_diacritic_invariance() {
    assert_eq!(fold("İSTANBUL"), fold("istanbul"));
    assert_eq!(fold("şeker"), fold("SEKER"));
    assert_eq!(fold("ŞEKER"), "seker");
    assert_eq!(fold("Işık ılık"), "isik ilik");
    assert_eq!(fold("  çiçek \n  böcek "), "cicek bocek");
}

#[test]
fn test_fold_leaves_ascii_alone() {
    assert_eq!(fold("abc-123_x, y!"), "abc-123_x, y!");
}

#[test]
fn test_matching_is_deterministic() {
    let text = "Rüyamda denizde ada tavşanı ve yılan gördüm";

    let first = find_matches(text, &dictionary(), 5);
    let second = find_matches(text, &dictionary(), 5);
    assert_eq!(first, second);

    let index = dictionary();
    assert_eq!(find_matches(text, &index, 5), find_matches(text, &index, 5));
}

#[test]
fn test_no_duplicate_pairs() {
    let matches = find_matches("yılan yılan YILAN", &dictionary(), 5);

    let pairs: HashSet<(&str, &str)> = matches
        .iter()
        .map(|m| (m.word.as_str(), m.meaning.as_str()))
        .collect();
    assert_eq!(pairs.len(), matches.len());
    assert_eq!(words(&matches), vec!["YILAN", "Yılan"]);
}

#[test]
fn test_longest_phrase_precedence() {
    let matches = find_matches("adada ada tavşanı gördüm", &dictionary(), 5);
    assert!(words(&matches).contains(&"ADA TAVŞANI"));

    let matches = find_matches("ada tavşanı ve tavşan", &dictionary(), 5);
    assert_eq!(words(&matches), vec!["ADA TAVŞANI", "TAVŞAN"]);
}

#[test]
fn test_substring_fallback() {
    let matches = find_matches("yılancık", &dictionary(), 5);
    assert_eq!(words(&matches), vec!["YILAN", "Yılan"]);
}

#[test]
fn test_fallback_not_used_when_phrase_matches() {
    // "yilancik" would hit the fallback, but DENİZ matches as a phrase
    let matches = find_matches("deniz ve yılancık", &dictionary(), 5);
    assert_eq!(words(&matches), vec!["DENİZ"]);
}

#[test]
fn test_empty_input() {
    assert!(find_matches("", &dictionary(), 5).is_empty());
    assert!(find_matches(" \t\n", &dictionary(), 5).is_empty());
    assert!(find_matches("!!! ???", &dictionary(), 5).is_empty());
}

#[test]
fn test_empty_dictionary() {
    let index = DictionaryIndex::build(Vec::new());
    assert!(find_matches("deniz", &index, 5).is_empty());
}

#[test]
fn test_parenthetical_alternate_key() {
    let matches = find_matches("acve yedim", &dictionary(), 5);
    assert_eq!(words(&matches), vec!["ACVE (Acve hurması)"]);
}

#[test]
fn test_inflected_forms() {
    let matches = find_matches("Herkes savaşıyordu", &dictionary(), 5);
    assert_eq!(words(&matches), vec!["SAVAŞ"]);

    let matches = find_matches("öpüşmek", &dictionary(), 5);
    assert_eq!(words(&matches), vec!["ÖPMEK"]);
}

#[test]
fn test_similative_phrase() {
    let matches = find_matches("Kendimi deniz gibi hissettim", &dictionary(), 5);
    assert_eq!(words(&matches), vec!["DENİZ"]);
}

#[test]
fn test_dotted_capital_matches() {
    // Found through the substring fallback
    let matches = find_matches("istanbulda gezdim", &dictionary(), 5);
    assert_eq!(words(&matches), vec!["İSTANBUL"]);

    let matches = find_matches("İstanbul", &dictionary(), 5);
    assert_eq!(words(&matches), vec!["İSTANBUL"]);
}

#[test]
fn test_stemmer_root_and_infinitive() {
    let candidates = stem_candidates("geliyordu");
    assert!(candidates.contains(&"gel".to_string()));
    assert!(candidates.contains(&"gelmek".to_string()));

    let candidates = stem_candidates("savasiyormus");
    assert!(candidates.contains(&"savas".to_string()));
    assert!(candidates.contains(&"savasmak".to_string()));

    let mut sorted = candidates.clone();
    sorted.sort();
    assert_eq!(candidates, sorted);
}

#[test]
fn test_sentiment_classification() {
    assert_eq!(sentiment_hint("bereket"), Sentiment::Positive);
    assert_eq!(sentiment_hint("hastalık"), Sentiment::Negative);
    assert_eq!(sentiment_hint("yolculuk"), Sentiment::Neutral);
}

#[test]
fn test_shared_index_across_threads() {
    let index = dictionary();
    let text = "ada tavşanı ve yılan";
    let expected = find_matches(text, &index, 5);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| find_matches(text, &index, 5)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_custom_matcher_config() -> Result<()> {
    let config = MatcherConfig {
        fallback_min_key_chars: 6,
        ..MatcherConfig::default()
    };
    let matcher = Matcher::with_config(config)?;

    // "yilan" is five characters, below the raised fallback threshold
    assert!(matcher.find_matches("yılancık", &dictionary()).is_empty());
    Ok(())
}
