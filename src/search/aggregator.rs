//! Three-strategy search with precedence merge
//!
//! Strategies run in a fixed order and their hits are concatenated:
//!
//! 1. **Indexed**: ids from the [`TextIndex`], resolved against the corpus
//! 2. **Substring**: case-insensitive literal match over every text field,
//!    with query and fields NFC-composed
//! 3. **Fuzzy**: similarity of the query to title/description over a sample
//!
//! The merged list keeps the first occurrence of each id, so an item found
//! by the index never reappears as a substring or fuzzy hit.

use std::collections::HashMap;

use itertools::Itertools;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use super::text_index::TextIndex;
use crate::config::SearchConfig;
use crate::content::ContentItem;
use crate::error::{RankError, Result};
use crate::similarity;

/// Which strategy produced a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Indexed,
    Substring,
    Fuzzy,
}

impl MatchSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indexed => "indexed",
            Self::Substring => "substring",
            Self::Fuzzy => "fuzzy",
        }
    }
}

/// One search result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchHit<'a> {
    #[serde(flatten)]
    pub item: &'a ContentItem,
    pub source: MatchSource,
    /// Similarity score, present for fuzzy hits only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_score: Option<u8>,
}

impl<'a> SearchHit<'a> {
    const fn new(item: &'a ContentItem, source: MatchSource) -> Self {
        Self {
            item,
            source,
            fuzzy_score: None,
        }
    }
}

/// Ordered hits with unique ids
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SearchResultSet<'a> {
    hits: Vec<SearchHit<'a>>,
}

impl<'a> SearchResultSet<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchHit<'a>> {
        self.hits.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&'a str> {
        self.hits.iter().map(|hit| hit.item.id.as_str()).collect()
    }

    #[must_use]
    pub fn into_hits(self) -> Vec<SearchHit<'a>> {
        self.hits
    }
}

impl<'a> IntoIterator for SearchResultSet<'a> {
    type Item = SearchHit<'a>;
    type IntoIter = std::vec::IntoIter<SearchHit<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

/// Runs the three strategies over a caller-supplied corpus
pub struct SearchAggregator<'i> {
    config: SearchConfig,
    index: &'i dyn TextIndex,
}

impl<'i> SearchAggregator<'i> {
    #[must_use]
    pub fn new(config: SearchConfig, index: &'i dyn TextIndex) -> Self {
        Self { config, index }
    }

    /// Merge indexed, substring and fuzzy hits for `query`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the text index.
    pub fn search<'a>(&self, query: &str, corpus: &'a [ContentItem]) -> Result<SearchResultSet<'a>> {
        let indexed = self.indexed(query, corpus)?;
        let substring = self.substring(query, corpus)?;
        let fuzzy = self.fuzzy(query, corpus);

        debug!(
            query,
            corpus = corpus.len(),
            indexed = indexed.len(),
            substring = substring.len(),
            fuzzy = fuzzy.len(),
            "search strategies finished"
        );

        let hits: Vec<SearchHit<'a>> = indexed
            .into_iter()
            .chain(substring)
            .chain(fuzzy)
            .unique_by(|hit| hit.item.id.clone())
            .collect();

        Ok(SearchResultSet { hits })
    }

    fn indexed<'a>(&self, query: &str, corpus: &'a [ContentItem]) -> Result<Vec<SearchHit<'a>>> {
        let ids = self.index.search_ids(query, self.config.indexed_cap)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let by_id: HashMap<&str, &'a ContentItem> =
            corpus.iter().map(|item| (item.id.as_str(), item)).collect();

        Ok(ids
            .iter()
            .filter_map(|id| by_id.get(id.as_str()).copied())
            .take(self.config.indexed_cap)
            .map(|item| SearchHit::new(item, MatchSource::Indexed))
            .collect())
    }

    fn substring<'a>(&self, query: &str, corpus: &'a [ContentItem]) -> Result<Vec<SearchHit<'a>>> {
        let pattern = literal_pattern(&similarity::compose(query))?;

        Ok(corpus
            .iter()
            .filter(|item| {
                item.searchable_text()
                    .into_iter()
                    .any(|field| pattern.is_match(&similarity::compose(field)))
            })
            .take(self.config.substring_cap)
            .map(|item| SearchHit::new(item, MatchSource::Substring))
            .collect())
    }

    fn fuzzy<'a>(&self, query: &str, corpus: &'a [ContentItem]) -> Vec<SearchHit<'a>> {
        let mut hits: Vec<SearchHit<'a>> = corpus
            .iter()
            .take(self.config.fuzzy_sample)
            .filter_map(|item| {
                let score = similarity::score(query, &item.title)
                    .max(similarity::score(query, &item.description));
                (score > self.config.fuzzy_threshold).then_some(SearchHit {
                    item,
                    source: MatchSource::Fuzzy,
                    fuzzy_score: Some(score),
                })
            })
            .collect();

        hits.sort_by(|a, b| b.fuzzy_score.cmp(&a.fuzzy_score));
        hits.truncate(self.config.fuzzy_cap);
        hits
    }
}

/// Case-insensitive regex matching `query` literally.
fn literal_pattern(query: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .map_err(|err| RankError::QueryParse(format!("cannot build substring matcher: {err}")))
}
