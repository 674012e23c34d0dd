//! "More like this" recommendations
//!
//! Given a reference recipe or blog post and a pre-fetched candidate pool,
//! scores every eligible candidate with [`FieldWeightAggregator`] and returns
//! the top `limit` by descending score.
//!
//! Eligibility:
//! - never the reference itself (matched by id)
//! - same kind as the reference
//! - blogs must be published; recipes have no status filter
//!
//! Ties keep pool order. The engine performs no I/O and holds no mutable
//! state, so one instance can serve concurrent requests.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::aggregate::FieldWeightAggregator;
use crate::config::RecommendConfig;
use crate::content::{ContentItem, ScoredCandidate};
use crate::error::{RankError, Result};

/// Number of recommendations returned when the caller does not specify one.
pub const DEFAULT_LIMIT: usize = 4;

/// Validate a signed limit coming from an untyped boundary (CLI, env).
///
/// # Errors
///
/// Returns [`RankError::InvalidArgument`] for negative values.
pub fn checked_limit(raw: i64) -> Result<usize> {
    usize::try_from(raw)
        .map_err(|_| RankError::InvalidArgument(format!("limit must not be negative, got {raw}")))
}

/// Ranks candidate items by similarity to a reference item
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    aggregator: FieldWeightAggregator,
}

impl RecommendationEngine {
    #[must_use]
    pub const fn new(aggregator: FieldWeightAggregator) -> Self {
        Self { aggregator }
    }

    #[must_use]
    pub const fn from_config(config: &RecommendConfig) -> Self {
        Self::new(FieldWeightAggregator::new(
            config.measure,
            config.recipe_weights,
            config.blog_weights,
        ))
    }

    #[must_use]
    pub const fn aggregator(&self) -> &FieldWeightAggregator {
        &self.aggregator
    }

    /// Top `limit` candidates from `pool`, most similar first.
    ///
    /// An empty pool (or `limit == 0`) yields an empty vector.
    #[must_use]
    pub fn recommend<'a>(
        &self,
        reference: &ContentItem,
        pool: &'a [ContentItem],
        limit: usize,
    ) -> Vec<ScoredCandidate<'a>> {
        if limit == 0 || pool.is_empty() {
            return Vec::new();
        }

        let eligible: Vec<&'a ContentItem> = pool
            .iter()
            .filter(|candidate| is_eligible(reference, candidate))
            .collect();

        // par_iter + collect keeps pool order, which the stable sort relies on
        let mut scored: Vec<ScoredCandidate<'a>> = eligible
            .par_iter()
            .map(|candidate| ScoredCandidate {
                item: candidate,
                similarity_score: self.aggregator.score(reference, candidate),
            })
            .collect();

        scored.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        scored.truncate(limit);

        for candidate in &scored {
            trace!(
                reference = %reference.id,
                candidate = %candidate.item.id,
                score = candidate.similarity_score,
                "recommendation"
            );
        }
        debug!(
            reference = %reference.id,
            kind = %reference.kind(),
            pool = pool.len(),
            eligible = eligible.len(),
            returned = scored.len(),
            "ranked recommendation candidates"
        );

        scored
    }
}

fn is_eligible(reference: &ContentItem, candidate: &ContentItem) -> bool {
    candidate.id != reference.id
        && candidate.kind() == reference.kind()
        && candidate.is_published()
}
