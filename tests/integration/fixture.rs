//! Shared content for integration tests.

use chrono::{Duration, TimeZone, Utc};
use cookrank::content::{BlogCategory, BlogStatus, ContentItem};
use cookrank::storage::SqliteStore;
use tempfile::TempDir;

/// Recipes and blog posts with creation times one day apart, oldest first.
pub fn sample_items() -> Vec<ContentItem> {
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let mut items = vec![
        ContentItem::recipe("r1", "Spicy Chicken Curry", "Weeknight curry with heat")
            .with_slug("spicy-chicken-curry")
            .with_ingredients(&["chicken", "curry paste", "coconut milk"])
            .with_instructions(&["Brown the chicken", "Simmer with coconut milk"]),
        ContentItem::recipe("r2", "Chicken Noodle Soup", "Comforting broth")
            .with_slug("chicken-noodle-soup")
            .with_ingredients(&["chicken", "noodles", "carrot"])
            .with_instructions(&["Simmer the stock", "Add noodles"]),
        ContentItem::recipe("r3", "Vegetable Stew", "Hearty and slow")
            .with_slug("vegetable-stew")
            .with_ingredients(&["potato", "carrot", "celery"])
            .with_instructions(&["Chop everything", "Simmer for an hour"]),
        ContentItem::recipe("r4", "Lemon Tart", "Sharp and sweet")
            .with_slug("lemon-tart")
            .with_ingredients(&["lemon", "butter", "sugar"]),
        ContentItem::blog("b1", "Knife care basics", "Keep an edge")
            .with_slug("knife-care-basics")
            .with_content("Hone often and sharpen rarely.")
            .with_category(BlogCategory::CookingTips)
            .with_tags(&["tools", "knives"]),
        ContentItem::blog("b2", "Knife sharpening", "Whetstones explained")
            .with_slug("knife-sharpening")
            .with_content("Start with a coarse grit.")
            .with_category(BlogCategory::CookingTips)
            .with_tags(&["tools", "knives"]),
        ContentItem::blog("b3", "Street food in Hanoi", "A week of eating")
            .with_slug("street-food-hanoi")
            .with_category(BlogCategory::FoodCulture)
            .with_tags(&["travel"]),
        ContentItem::blog("b4", "Knife care draft", "Keep an edge")
            .with_slug("knife-care-draft")
            .with_status(BlogStatus::Draft)
            .with_category(BlogCategory::CookingTips)
            .with_tags(&["tools", "knives"]),
    ];
    for (offset, item) in items.iter_mut().enumerate() {
        item.created_at = base + Duration::days(i64::try_from(offset).unwrap());
    }
    items
}

/// A file-backed SQLite store seeded with [`sample_items`].
pub struct SeededStore {
    pub dir: TempDir,
    pub store: SqliteStore,
}

impl SeededStore {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("cookrank.db")).unwrap();
        store.import(&sample_items()).unwrap();
        Self { dir, store }
    }
}
