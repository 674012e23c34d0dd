//! Request-level orchestration over a [`ContentStore`]
//!
//! The ranking modules work on slices they are handed. `Catalog` plays the
//! calling handler: it fetches the pool or corpus from the store, builds the
//! per-request full-text index, runs the ranking, and pages the output.

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::content::{ContentItem, ContentKind};
use crate::error::{RankError, Result, suggest_similar_ids};
use crate::paginate::{Page, PageRequest};
use crate::recommend::RecommendationEngine;
use crate::search::{Bm25Index, MatchSource, SearchAggregator, SearchHit};
use crate::storage::ContentStore;

/// Minimum similarity for "did you mean" handle suggestions.
const SUGGESTION_MIN_SCORE: u8 = 60;
const MAX_SUGGESTIONS: usize = 3;

/// A listed or searched item, owned so it can outlive the fetched corpus
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub item: ContentItem,
    /// Strategy that found the item; absent for plain listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<MatchSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_score: Option<u8>,
}

impl CatalogEntry {
    const fn listed(item: ContentItem) -> Self {
        Self {
            item,
            source: None,
            fuzzy_score: None,
        }
    }
}

impl From<SearchHit<'_>> for CatalogEntry {
    fn from(hit: SearchHit<'_>) -> Self {
        Self {
            item: hit.item.clone(),
            source: Some(hit.source),
            fuzzy_score: hit.fuzzy_score,
        }
    }
}

/// A recommended item with its aggregate similarity score
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub item: ContentItem,
    pub similarity_score: f64,
}

pub struct Catalog<'s> {
    store: &'s dyn ContentStore,
    config: Config,
    engine: RecommendationEngine,
}

impl<'s> Catalog<'s> {
    #[must_use]
    pub fn new(store: &'s dyn ContentStore, config: Config) -> Self {
        let engine = RecommendationEngine::from_config(&config.recommend);
        Self {
            store,
            config,
            engine,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Newest-first listing of visible items.
    pub fn browse(&self, kind: ContentKind, page: usize) -> Result<Page<CatalogEntry>> {
        let request = PageRequest::new(page, self.config.browse.page_size)?;
        let total = self.store.count(kind)?;
        let items = self
            .store
            .list(kind, request.page_size, request.offset())?;
        Ok(Page::new(items, request, total).map(CatalogEntry::listed))
    }

    /// Search `kind` for `query`; a blank query falls back to [`Catalog::browse`].
    pub fn search(&self, kind: ContentKind, query: &str, page: usize) -> Result<Page<CatalogEntry>> {
        let query = query.trim();
        if query.is_empty() {
            debug!(%kind, "blank query, showing listing");
            return self.browse(kind, page);
        }

        let request = PageRequest::new(page, self.config.browse.page_size)?;
        let corpus = self.all_visible(kind)?;
        let index = Bm25Index::build(&corpus)?;
        let results = SearchAggregator::new(self.config.search, &index).search(query, &corpus)?;

        debug!(%kind, query, corpus = corpus.len(), hits = results.len(), "catalog search");

        let entries: Vec<CatalogEntry> = results.into_iter().map(CatalogEntry::from).collect();
        Ok(Page::from_all(entries, request))
    }

    /// Items of `kind` most similar to the one identified by `handle`
    /// (slug or id).
    ///
    /// # Errors
    ///
    /// [`RankError::ContentNotFound`] with near-miss handles when nothing
    /// matches, [`RankError::KindMismatch`] when the handle names an item
    /// of the other kind.
    pub fn recommend(
        &self,
        kind: ContentKind,
        handle: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Recommendation>> {
        let pool = self.all_visible(kind)?;

        let Some(reference) = self.store.resolve(handle)? else {
            let handles: Vec<&str> = pool.iter().map(ContentItem::handle).collect();
            return Err(RankError::ContentNotFound {
                id: handle.to_string(),
                suggestions: suggest_similar_ids(
                    handle,
                    &handles,
                    SUGGESTION_MIN_SCORE,
                    MAX_SUGGESTIONS,
                ),
            });
        };

        if reference.kind() != kind {
            return Err(RankError::KindMismatch {
                expected: kind.to_string(),
                found: reference.kind().to_string(),
            });
        }

        let limit = limit.unwrap_or(self.config.recommend.limit);
        debug!(%kind, reference = %reference.id, pool = pool.len(), limit, "catalog recommend");
        Ok(self
            .engine
            .recommend(&reference, &pool, limit)
            .into_iter()
            .map(|scored| Recommendation {
                item: scored.item.clone(),
                similarity_score: scored.similarity_score,
            })
            .collect())
    }

    fn all_visible(&self, kind: ContentKind) -> Result<Vec<ContentItem>> {
        let total = self.store.count(kind)?;
        self.store.list(kind, total, 0)
    }
}
