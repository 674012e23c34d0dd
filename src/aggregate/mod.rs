//! Weighted multi-field similarity
//!
//! Combines per-field similarity scores into one aggregate score used to rank
//! recommendations.
//!
//! ## Weights
//!
//! ```text
//! recipe = 0.3 * title + 0.3 * description + 0.4 * ingredients
//! blog   = 0.3 * title + 0.2 * description + 0.3 * category + 0.2 * tags
//! ```
//!
//! The list sub-scores (ingredients, tags) take, for each reference-side
//! entry, its best match on the candidate side and average those maxima.
//! Weights are expected to sum to 1.0 but this is not enforced.

use serde::{Deserialize, Serialize};

use crate::content::{ContentItem, ContentKind};
use crate::similarity::{MAX_SCORE, SimilarityMeasure};

/// Weighted sum of `(score, weight)` pairs.
#[must_use]
pub fn aggregate(field_scores: &[(f64, f64)]) -> f64 {
    field_scores.iter().map(|(score, weight)| score * weight).sum()
}

/// Average over `reference` of the best similarity against any `candidate`.
///
/// Returns 0 when either side is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn best_match_average<R, C>(reference: &[R], candidate: &[C], measure: SimilarityMeasure) -> f64
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    if reference.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let total: u32 = reference
        .iter()
        .map(|r| {
            candidate
                .iter()
                .map(|c| measure.score(r.as_ref(), c.as_ref()))
                .max()
                .map_or(0, u32::from)
        })
        .sum();

    f64::from(total) / reference.len() as f64
}

/// Field weights for recipe similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeWeights {
    #[serde(default = "default_recipe_title")]
    pub title: f64,
    #[serde(default = "default_recipe_description")]
    pub description: f64,
    #[serde(default = "default_recipe_ingredients")]
    pub ingredients: f64,
}

const fn default_recipe_title() -> f64 {
    0.3
}

const fn default_recipe_description() -> f64 {
    0.3
}

const fn default_recipe_ingredients() -> f64 {
    0.4
}

impl Default for RecipeWeights {
    fn default() -> Self {
        Self {
            title: default_recipe_title(),
            description: default_recipe_description(),
            ingredients: default_recipe_ingredients(),
        }
    }
}

/// Field weights for blog similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlogWeights {
    #[serde(default = "default_blog_title")]
    pub title: f64,
    #[serde(default = "default_blog_description")]
    pub description: f64,
    #[serde(default = "default_blog_category")]
    pub category: f64,
    #[serde(default = "default_blog_tags")]
    pub tags: f64,
}

const fn default_blog_title() -> f64 {
    0.3
}

const fn default_blog_description() -> f64 {
    0.2
}

const fn default_blog_category() -> f64 {
    0.3
}

const fn default_blog_tags() -> f64 {
    0.2
}

impl Default for BlogWeights {
    fn default() -> Self {
        Self {
            title: default_blog_title(),
            description: default_blog_description(),
            category: default_blog_category(),
            tags: default_blog_tags(),
        }
    }
}

/// Scores a candidate against a reference item using kind-specific weights
#[derive(Debug, Clone, Default)]
pub struct FieldWeightAggregator {
    pub measure: SimilarityMeasure,
    pub recipe: RecipeWeights,
    pub blog: BlogWeights,
}

impl FieldWeightAggregator {
    #[must_use]
    pub const fn new(measure: SimilarityMeasure, recipe: RecipeWeights, blog: BlogWeights) -> Self {
        Self {
            measure,
            recipe,
            blog,
        }
    }

    /// Aggregate similarity of `candidate` to `reference`, in `[0, 100]`
    /// when the weights sum to 1.0.
    ///
    /// The formula is chosen by the reference item's kind.
    #[must_use]
    pub fn score(&self, reference: &ContentItem, candidate: &ContentItem) -> f64 {
        let title = f64::from(self.measure.score(&reference.title, &candidate.title));
        let description =
            f64::from(self.measure.score(&reference.description, &candidate.description));

        match reference.kind() {
            ContentKind::Recipe => {
                let ingredients = best_match_average(
                    &reference.ingredient_names(),
                    &candidate.ingredient_names(),
                    self.measure,
                );
                aggregate(&[
                    (title, self.recipe.title),
                    (description, self.recipe.description),
                    (ingredients, self.recipe.ingredients),
                ])
            }
            ContentKind::Blog => {
                let category = match (reference.category(), candidate.category()) {
                    (Some(a), Some(b)) if a == b => f64::from(MAX_SCORE),
                    _ => 0.0,
                };
                let tags = best_match_average(reference.tags(), candidate.tags(), self.measure);
                aggregate(&[
                    (title, self.blog.title),
                    (description, self.blog.description),
                    (category, self.blog.category),
                    (tags, self.blog.tags),
                ])
            }
        }
    }
}
