use cookrank::content::ContentKind;
use cookrank::storage::migrations::SCHEMA_VERSION;
use cookrank::storage::{ContentStore, SqliteStore, open_store};

use crate::fixture::{SeededStore, sample_items};

#[test]
fn test_reopen_keeps_content() {
    let seeded = SeededStore::new();
    let path = seeded.dir.path().join("cookrank.db");
    drop(seeded.store);

    let reopened = SqliteStore::open(&path).unwrap();
    assert_eq!(reopened.schema_version(), SCHEMA_VERSION);
    assert_eq!(reopened.count(ContentKind::Recipe).unwrap(), 4);
    assert_eq!(reopened.count(ContentKind::Blog).unwrap(), 3);
}

#[test]
fn test_reimport_is_idempotent() {
    let seeded = SeededStore::new();
    seeded.store.import(&sample_items()).unwrap();
    assert_eq!(seeded.store.count(ContentKind::Recipe).unwrap(), 4);
}

#[test]
fn test_drafts_resolvable_but_not_listed() {
    let seeded = SeededStore::new();
    let draft = seeded.store.resolve("knife-care-draft").unwrap().unwrap();
    assert_eq!(draft.id, "b4");
    assert!(!draft.is_published());

    let listed = seeded.store.list(ContentKind::Blog, 10, 0).unwrap();
    assert!(listed.iter().all(|item| item.id != "b4"));
}

#[test]
fn test_stored_documents_round_trip() {
    let seeded = SeededStore::new();
    let original = sample_items().into_iter().find(|i| i.id == "r2").unwrap();
    let stored = seeded.store.get("r2").unwrap().unwrap();
    assert_eq!(stored.ingredient_names(), original.ingredient_names());
    assert_eq!(stored.created_at, original.created_at);
    assert_eq!(stored.slug.as_deref(), Some("chicken-noodle-soup"));
}

#[test]
fn test_open_store_dispatches_on_extension() {
    let seeded = SeededStore::new();

    let json_path = seeded.dir.path().join("content.json");
    std::fs::write(&json_path, serde_json::to_string(&sample_items()).unwrap()).unwrap();
    let memory = open_store(&json_path).unwrap();

    let sqlite = open_store(&seeded.dir.path().join("cookrank.db")).unwrap();

    let from_json = memory.list(ContentKind::Recipe, 10, 0).unwrap();
    let from_sqlite = sqlite.list(ContentKind::Recipe, 10, 0).unwrap();
    let json_ids: Vec<_> = from_json.iter().map(|i| i.id.as_str()).collect();
    let sqlite_ids: Vec<_> = from_sqlite.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(json_ids, sqlite_ids);
}
