//! Criterion benchmarks for the ranking hot paths.
//!
//! - similarity: single pair scoring, both measures, plus a long query
//! - recommend: full pool scan for one reference item
//! - search: index build plus three-strategy merge

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use cookrank::config::SearchConfig;
use cookrank::content::{BlogCategory, ContentItem};
use cookrank::recommend::RecommendationEngine;
use cookrank::search::{Bm25Index, SearchAggregator};
use cookrank::similarity::SimilarityMeasure;

const INGREDIENTS: &[&str] = &[
    "chicken", "garlic", "onion", "carrot", "lemon", "butter", "flour", "rice", "ginger",
    "tomato", "basil", "potato",
];

fn recipes(count: usize) -> Vec<ContentItem> {
    (0..count)
        .map(|i| {
            let picks: Vec<&str> = (0..4).map(|k| INGREDIENTS[(i + k * 5) % INGREDIENTS.len()]).collect();
            ContentItem::recipe(
                format!("r{i}"),
                format!("{} and {} bake {i}", picks[0], picks[1]),
                format!("A {} dish finished with {}", picks[2], picks[3]),
            )
            .with_ingredients(&picks)
            .with_instructions(&["Prepare everything", "Cook until done"])
        })
        .collect()
}

fn blogs(count: usize) -> Vec<ContentItem> {
    (0..count)
        .map(|i| {
            ContentItem::blog(format!("b{i}"), format!("Kitchen notes {i}"), "Things we learned")
                .with_content("Season early, taste often, and rest your meat. ".repeat(20))
                .with_category(if i % 2 == 0 {
                    BlogCategory::CookingTips
                } else {
                    BlogCategory::FoodCulture
                })
                .with_tags(&["technique", "weeknight"])
        })
        .collect()
}

// =============================================================================
// Similarity
// =============================================================================

fn similarity_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    for len in [8usize, 32, 128] {
        let left = "chicken soup ".repeat(len / 8 + 1);
        let right = "chicken noodle stew ".repeat(len / 8 + 1);

        group.throughput(Throughput::Bytes((left.len() + right.len()) as u64));
        for measure in [SimilarityMeasure::Ratio, SimilarityMeasure::Partial] {
            group.bench_with_input(
                BenchmarkId::new(measure.as_str(), len),
                &(left.as_str(), right.as_str()),
                |b, (l, r)| b.iter(|| measure.score(black_box(l), black_box(r))),
            );
        }
    }

    // a pasted sentence against a long blog body
    let body = "Season early, taste often, and rest your meat. ".repeat(53);
    let query = body[10..160].replacen("taste", "tasty", 1);
    group.throughput(Throughput::Bytes((query.len() + body.len()) as u64));
    group.bench_function("partial_long_query", |b| {
        b.iter(|| SimilarityMeasure::Partial.score(black_box(&query), black_box(&body)))
    });

    group.finish();
}

// =============================================================================
// Recommendations
// =============================================================================

fn recommend_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let engine = RecommendationEngine::default();

    for size in [100usize, 1000] {
        let pool = recipes(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("recipes", size), &pool, |b, pool| {
            b.iter(|| engine.recommend(black_box(&pool[0]), pool, 4))
        });
    }

    let pool = blogs(200);
    group.bench_function("blogs_200", |b| {
        b.iter(|| engine.recommend(black_box(&pool[0]), &pool, 4))
    });

    group.finish();
}

// =============================================================================
// Search
// =============================================================================

fn search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [50usize, 500] {
        let corpus = recipes(size);

        group.bench_with_input(BenchmarkId::new("build_and_search", size), &corpus, |b, corpus| {
            b.iter(|| {
                let index = Bm25Index::build(corpus).unwrap();
                SearchAggregator::new(SearchConfig::default(), &index)
                    .search(black_box("chiken"), corpus)
                    .unwrap()
                    .len()
            })
        });

        let index = Bm25Index::build(&corpus).unwrap();
        group.bench_with_input(BenchmarkId::new("search_only", size), &corpus, |b, corpus| {
            let aggregator = SearchAggregator::new(SearchConfig::default(), &index);
            b.iter(|| aggregator.search(black_box("garlic"), corpus).unwrap().len())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    similarity_benchmarks,
    recommend_benchmarks,
    search_benchmarks
);
criterion_main!(benches);
