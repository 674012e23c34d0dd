use cookrank::RankError;
use cookrank::catalog::Catalog;
use cookrank::config::Config;
use cookrank::content::ContentKind;
use cookrank::search::MatchSource;

use crate::fixture::SeededStore;

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| id(item).to_string()).collect()
}

#[test]
fn test_browse_newest_first_without_drafts() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let recipes = catalog.browse(ContentKind::Recipe, 1).unwrap();
    assert_eq!(ids(&recipes.items, |e| &e.item.id), vec!["r4", "r3", "r2", "r1"]);

    let blogs = catalog.browse(ContentKind::Blog, 1).unwrap();
    assert_eq!(ids(&blogs.items, |e| &e.item.id), vec!["b3", "b2", "b1"]);
    assert_eq!(blogs.total, 3);
    assert!(blogs.items.iter().all(|e| e.source.is_none()));
}

#[test]
fn test_browse_pages() {
    let seeded = SeededStore::new();
    let mut config = Config::default();
    config.browse.page_size = 3;
    let catalog = Catalog::new(&seeded.store, config);

    let first = catalog.browse(ContentKind::Recipe, 1).unwrap();
    assert_eq!(first.items.len(), 3);
    assert_eq!(first.total_pages, 2);
    assert!(first.has_next);

    let second = catalog.browse(ContentKind::Recipe, 2).unwrap();
    assert_eq!(ids(&second.items, |e| &e.item.id), vec!["r1"]);
    assert!(!second.has_next);
    assert!(second.has_prev);

    let beyond = catalog.browse(ContentKind::Recipe, 5).unwrap();
    assert!(beyond.items.is_empty());
}

#[test]
fn test_search_finds_matches_only() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let page = catalog.search(ContentKind::Recipe, "chicken", 1).unwrap();
    let mut found = ids(&page.items, |e| &e.item.id);
    found.sort();
    assert_eq!(found, vec!["r1", "r2"]);
    assert!(page.items.iter().all(|e| e.source.is_some()));
}

#[test]
fn test_search_first_hit_is_indexed() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let page = catalog.search(ContentKind::Recipe, "noodles", 1).unwrap();
    assert_eq!(page.items[0].item.id, "r2");
    assert_eq!(page.items[0].source, Some(MatchSource::Indexed));
}

#[test]
fn test_search_never_returns_other_kind_or_drafts() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let page = catalog.search(ContentKind::Blog, "knife", 1).unwrap();
    let found = ids(&page.items, |e| &e.item.id);
    assert!(found.contains(&"b1".to_string()));
    assert!(found.contains(&"b2".to_string()));
    assert!(!found.contains(&"b4".to_string()));
    assert!(found.iter().all(|id| id.starts_with('b')));
}

#[test]
fn test_blank_search_is_browse() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let searched = catalog.search(ContentKind::Recipe, "  ", 1).unwrap();
    let browsed = catalog.browse(ContentKind::Recipe, 1).unwrap();
    assert_eq!(
        ids(&searched.items, |e| &e.item.id),
        ids(&browsed.items, |e| &e.item.id)
    );
}

#[test]
fn test_search_paginates_results() {
    let seeded = SeededStore::new();
    let mut config = Config::default();
    config.browse.page_size = 1;
    let catalog = Catalog::new(&seeded.store, config);

    let first = catalog.search(ContentKind::Recipe, "chicken", 1).unwrap();
    assert_eq!(first.items.len(), 1);
    assert_eq!(first.total, 2);
    assert!(first.has_next);

    let second = catalog.search(ContentKind::Recipe, "chicken", 2).unwrap();
    assert_ne!(first.items[0].item.id, second.items[0].item.id);
}

#[test]
fn test_recommend_by_slug_and_id_agree() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let by_slug = catalog
        .recommend(ContentKind::Blog, "knife-care-basics", None)
        .unwrap();
    let by_id = catalog.recommend(ContentKind::Blog, "b1", None).unwrap();

    assert_eq!(ids(&by_slug, |r| &r.item.id), ids(&by_id, |r| &r.item.id));
    assert_eq!(ids(&by_slug, |r| &r.item.id), vec!["b2", "b3"]);
}

#[test]
fn test_recommend_scores_descend() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let recs = catalog.recommend(ContentKind::Recipe, "r1", None).unwrap();
    assert_eq!(recs.len(), 3);
    assert!(recs.iter().all(|r| r.item.id != "r1"));
    assert!(
        recs.windows(2)
            .all(|pair| pair[0].similarity_score >= pair[1].similarity_score)
    );
}

#[test]
fn test_recommend_limit_override() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let recs = catalog.recommend(ContentKind::Recipe, "r1", Some(1)).unwrap();
    assert_eq!(recs.len(), 1);

    let none = catalog.recommend(ContentKind::Recipe, "r1", Some(0)).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_recommend_config_limit() {
    let seeded = SeededStore::new();
    let mut config = Config::default();
    config.recommend.limit = 2;
    let catalog = Catalog::new(&seeded.store, config);

    assert_eq!(catalog.recommend(ContentKind::Recipe, "r1", None).unwrap().len(), 2);
}

#[test]
fn test_recommend_unknown_handle_suggests() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let err = catalog
        .recommend(ContentKind::Blog, "knife-care-basic", None)
        .unwrap_err();
    match err {
        RankError::ContentNotFound { id, suggestions } => {
            assert_eq!(id, "knife-care-basic");
            assert!(suggestions.contains(&"knife-care-basics".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_recommend_kind_mismatch() {
    let seeded = SeededStore::new();
    let catalog = Catalog::new(&seeded.store, Config::default());

    let err = catalog.recommend(ContentKind::Recipe, "b1", None).unwrap_err();
    assert!(matches!(err, RankError::KindMismatch { .. }));
}
