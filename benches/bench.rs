//! Criterion benchmarks for coursefinder.
//!
//! Covers the two hot paths:
//! - Intent parsing (keyword analysis and classification)
//! - Full recommendation assembly (variants and deep links)

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use coursefinder::intent::{extract_keywords, parse_intent};
use coursefinder::recommend::{Mode, Recommender, Selection};
use std::hint::black_box;

/// Generate course requests for benchmarking.
fn generate_test_queries(count: usize) -> Vec<String> {
    let subjects = [
        "machine learning",
        "kubernetes",
        "rust async",
        "product management",
        "excel pivot tables",
        "generative ai",
        "sql for analysts",
        "ci/cd pipelines",
    ];
    let modifiers = [
        "for beginners",
        "advanced deep dive",
        "live cohort with certificate",
        "self-paced and free",
        "weekend crash course",
        "onsite classroom training",
    ];

    (0..count)
        .map(|i| {
            format!(
                "I want a {} course {}",
                subjects[(i * 7) % subjects.len()],
                modifiers[(i * 13) % modifiers.len()]
            )
        })
        .collect()
}

/// Benchmark keyword extraction and intent parsing.
fn bench_intent_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("intent_parsing");
    let queries = generate_test_queries(100);

    group.bench_function("extract_keywords_single", |b| {
        b.iter(|| black_box(extract_keywords(black_box(&queries[0]), 8)))
    });

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("parse_intent_batch", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(parse_intent(black_box(query)));
            }
        })
    });

    group.finish();
}

/// Benchmark the full recommendation pipeline.
fn bench_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");
    let queries = generate_test_queries(100);
    let recommender = Recommender::default();

    for mode in [Mode::Auto, Mode::OnlineTrainings] {
        let selection = Selection {
            mode,
            ..Selection::default()
        };
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("recommend_batch_{mode:?}"), |b| {
            b.iter(|| {
                for query in &queries {
                    let _ = black_box(recommender.recommend(black_box(query), &selection));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intent_parsing, bench_recommendation);
criterion_main!(benches);
