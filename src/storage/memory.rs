//! In-memory content store backed by a JSON array file

use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use super::ContentStore;
use crate::content::{ContentItem, ContentKind};
use crate::error::{RankError, Result};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<ContentItem>,
}

impl MemoryStore {
    #[must_use]
    pub const fn from_items(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// Load a JSON array of recipes and blog posts.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            RankError::NotFound(format!("content file {}: {err}", path.display()))
        })?;
        let items = parse_items(&raw)?;
        debug!(path = %path.display(), items = items.len(), "loaded content file");
        Ok(Self::from_items(items))
    }

    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    fn visible(&self, kind: ContentKind) -> impl Iterator<Item = &ContentItem> {
        self.items
            .iter()
            .filter(move |item| item.kind() == kind && item.is_published())
    }
}

/// Parse a JSON array of content items.
///
/// # Errors
///
/// [`RankError::InvalidArgument`] when two items share an id.
pub fn parse_items(raw: &str) -> Result<Vec<ContentItem>> {
    let items: Vec<ContentItem> = serde_json::from_str(raw)?;
    if let Some(id) = items.iter().map(|item| item.id.as_str()).duplicates().next() {
        return Err(RankError::InvalidArgument(format!(
            "content id {id:?} appears more than once"
        )));
    }
    Ok(items)
}

impl ContentStore for MemoryStore {
    fn list(&self, kind: ContentKind, limit: usize, offset: usize) -> Result<Vec<ContentItem>> {
        let mut visible: Vec<&ContentItem> = self.visible(kind).collect();
        // stable: equal timestamps keep file order
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(visible
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn count(&self, kind: ContentKind) -> Result<usize> {
        Ok(self.visible(kind).count())
    }

    fn get(&self, id: &str) -> Result<Option<ContentItem>> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }

    fn get_by_slug(&self, slug: &str) -> Result<Option<ContentItem>> {
        Ok(self
            .items
            .iter()
            .find(|item| item.slug.as_deref() == Some(slug))
            .cloned())
    }
}
