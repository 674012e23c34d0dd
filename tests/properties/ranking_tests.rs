use std::collections::HashSet;

use proptest::prelude::*;

use cookrank::config::SearchConfig;
use cookrank::content::ContentItem;
use cookrank::recommend::RecommendationEngine;
use cookrank::search::{Bm25Index, SearchAggregator};
use cookrank::similarity::{self, MAX_SCORE, SimilarityMeasure};

const WORDS: &[&str] = &[
    "chicken", "soup", "curry", "lemon", "tart", "stew", "garlic", "bread", "noodle", "spicy",
    "roast", "salad",
];

fn arb_phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..4).prop_map(|words| words.join(" "))
}

fn arb_recipes() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec((arb_phrase(), arb_phrase()), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (title, description))| ContentItem::recipe(format!("r{i}"), title, description))
            .collect()
    })
}

fn arb_measure() -> impl Strategy<Value = SimilarityMeasure> {
    prop_oneof![Just(SimilarityMeasure::Ratio), Just(SimilarityMeasure::Partial)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_is_bounded(a in ".{0,24}", b in ".{0,24}", measure in arb_measure()) {
        prop_assert!(measure.score(&a, &b) <= MAX_SCORE);
    }

    #[test]
    fn score_is_reflexive(a in "[a-zA-Z ]{1,24}", measure in arb_measure()) {
        prop_assert_eq!(measure.score(&a, &a), MAX_SCORE);
    }

    #[test]
    fn score_is_symmetric(a in "[a-z ]{0,16}", b in "[a-z ]{0,16}", measure in arb_measure()) {
        prop_assert_eq!(measure.score(&a, &b), measure.score(&b, &a));
    }

    #[test]
    fn empty_side_scores_zero(a in ".{0,24}") {
        prop_assert_eq!(similarity::ratio(&a, ""), 0);
        prop_assert_eq!(similarity::partial_ratio("", &a), 0);
    }

    #[test]
    fn score_ignores_case(a in "[a-z]{1,12}", b in "[a-z]{1,12}") {
        prop_assert_eq!(
            similarity::score(&a.to_uppercase(), &b),
            similarity::score(&a, &b)
        );
    }

    #[test]
    fn recommend_excludes_reference_and_respects_limit(
        items in arb_recipes(),
        pick in any::<prop::sample::Index>(),
        limit in 0usize..8,
    ) {
        prop_assume!(!items.is_empty());
        let reference = &items[pick.index(items.len())];
        let engine = RecommendationEngine::default();

        let recs = engine.recommend(reference, &items, limit);

        prop_assert!(recs.len() <= limit);
        prop_assert!(recs.len() <= items.len() - 1);
        prop_assert!(recs.iter().all(|r| r.item.id != reference.id));
        prop_assert!(
            recs.windows(2)
                .all(|pair| pair[0].similarity_score >= pair[1].similarity_score)
        );
    }

    #[test]
    fn recommend_returns_every_candidate_when_limit_allows(items in arb_recipes()) {
        prop_assume!(!items.is_empty());
        let engine = RecommendationEngine::default();
        let recs = engine.recommend(&items[0], &items, items.len());
        prop_assert_eq!(recs.len(), items.len() - 1);
    }

    #[test]
    fn search_hits_are_unique_and_from_corpus(items in arb_recipes(), query in arb_phrase()) {
        let index = Bm25Index::build(&items).unwrap();
        let results = SearchAggregator::new(SearchConfig::default(), &index)
            .search(&query, &items)
            .unwrap();

        let ids = results.ids();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());

        let corpus: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        prop_assert!(ids.iter().all(|id| corpus.contains(id)));
    }

    #[test]
    fn search_is_deterministic(items in arb_recipes(), query in arb_phrase()) {
        let index = Bm25Index::build(&items).unwrap();
        let aggregator = SearchAggregator::new(SearchConfig::default(), &index);

        let first = aggregator.search(&query, &items).unwrap().ids();
        let second = aggregator.search(&query, &items).unwrap().ids();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exact_title_is_always_found(items in arb_recipes(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let target = &items[pick.index(items.len())];
        let index = Bm25Index::build(&items).unwrap();

        let results = SearchAggregator::new(SearchConfig::default(), &index)
            .search(&target.title, &items)
            .unwrap();

        prop_assert!(!results.is_empty());
    }
}
