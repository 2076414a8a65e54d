//! Criterion benchmarks for the ruya matching engine.
//!
//! Covers the hot path of one interpretation request:
//! - Normalization and Turkish folding
//! - Stem candidate generation
//! - Dictionary index construction (including the folded view)
//! - Matching and interpretation

use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use ruya::analysis::{fold, normalize, stem_candidates, tokenize};
use ruya::dictionary::{DictionaryEntry, DictionaryIndex};
use ruya::interpretation::{InterpretConfig, interpret};
use ruya::matcher::Matcher;

const SYMBOLS: &[&str] = &[
    "YILAN", "DENİZ", "ALTIN", "KOÇ", "ADA TAVŞANI", "SAVAŞ", "ÖPMEK", "KUŞ", "AĞAÇ", "IŞIK",
    "KIRMIZI GÜL", "ÇEŞME", "GÜNEŞ", "AY", "YILDIZ", "ŞEHİR", "İNCİR", "ÜZÜM", "KAVGA", "DAĞ",
];

const NARRATIVES: &[&str] = &[
    "Rüyamda denizde yüzerken büyük bir yılan gördüm",
    "Kendimi kuş gibi hissettim ve dağların üzerinden uçtum",
    "Ada tavşanı ile birlikte kırmızı gül ağacının altında oturuyorduk",
    "Herkes savaşıyordu, ben de bir çeşmenin başında bekliyordum",
    "Gökyüzünde güneş ve ay aynı anda parlıyordu, yıldızlar da vardı",
];

/// Generate a synthetic dictionary of `count` entries.
fn generate_entries(count: usize) -> Vec<DictionaryEntry> {
    (0..count)
        .map(|i| {
            let base = SYMBOLS[i % SYMBOLS.len()];
            let word = if i < SYMBOLS.len() {
                base.to_string()
            } else {
                format!("{base} ({i})")
            };
            DictionaryEntry::new(word, format!("Rüyada {base} görmek bereket ve sıkıntıya işarettir {i}."))
        })
        .collect()
}

fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    group.throughput(Throughput::Elements(NARRATIVES.len() as u64));
    group.bench_function("normalize", |b| {
        b.iter(|| {
            for text in NARRATIVES {
                black_box(normalize(black_box(text)));
            }
        })
    });

    group.bench_function("fold", |b| {
        b.iter(|| {
            for text in NARRATIVES {
                black_box(fold(black_box(text)));
            }
        })
    });

    let tokens: Vec<String> = NARRATIVES.iter().flat_map(|t| tokenize(&fold(t))).collect();
    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("stem_candidates", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(stem_candidates(black_box(token)));
            }
        })
    });

    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.sample_size(20);

    for size in [1_000, 10_000] {
        let entries = generate_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("build_and_fold_{size}"), |b| {
            b.iter_batched(
                || entries.clone(),
                |entries| {
                    let index = DictionaryIndex::build(entries);
                    black_box(index.folded().len());
                    index
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    let index = DictionaryIndex::build(generate_entries(10_000));
    index.folded();
    let matcher = Matcher::new();

    group.throughput(Throughput::Elements(NARRATIVES.len() as u64));
    group.bench_function("find_matches", |b| {
        b.iter(|| {
            for text in NARRATIVES {
                black_box(matcher.find_matches(black_box(text), &index));
            }
        })
    });

    group.bench_function("find_matches_fallback", |b| {
        b.iter(|| black_box(matcher.find_matches(black_box("yılancıklar"), &index)))
    });

    group.bench_function("interpret", |b| {
        let config = InterpretConfig::default();
        b.iter(|| {
            for text in NARRATIVES {
                let matches = matcher.find_matches(text, &index);
                black_box(interpret(&matches, &config));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_index_build, bench_matching);

criterion_main!(benches);
