//! Persistence collaborators
//!
//! The ranking core never talks to a store directly; the catalog fetches
//! pools and corpora through [`ContentStore`] and hands plain slices down.
//!
//! - [`MemoryStore`]: a JSON array file loaded into memory
//! - [`SqliteStore`]: a SQLite document table

pub mod memory;
pub mod migrations;
pub mod sqlite;

use std::path::Path;

use crate::content::{ContentItem, ContentKind};
use crate::error::Result;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Read access to stored recipes and blog posts
pub trait ContentStore {
    /// Publicly visible items of `kind`, newest first.
    ///
    /// Draft blog posts are never listed.
    fn list(&self, kind: ContentKind, limit: usize, offset: usize) -> Result<Vec<ContentItem>>;

    /// Number of items [`ContentStore::list`] can return for `kind`.
    fn count(&self, kind: ContentKind) -> Result<usize>;

    fn get(&self, id: &str) -> Result<Option<ContentItem>>;

    fn get_by_slug(&self, slug: &str) -> Result<Option<ContentItem>>;

    /// Look up by slug first, then by id.
    fn resolve(&self, handle: &str) -> Result<Option<ContentItem>> {
        match self.get_by_slug(handle)? {
            Some(item) => Ok(Some(item)),
            None => self.get(handle),
        }
    }
}

/// Open the store at `path`: `.json` files load into memory, anything else
/// is treated as a SQLite database.
pub fn open_store(path: &Path) -> Result<Box<dyn ContentStore>> {
    if is_json_path(path) {
        Ok(Box::new(MemoryStore::from_json_file(path)?))
    } else {
        Ok(Box::new(SqliteStore::open(path)?))
    }
}

#[must_use]
pub fn is_json_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
