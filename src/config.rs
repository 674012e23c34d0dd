use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::aggregate::{BlogWeights, RecipeWeights};
use crate::error::{RankError, Result};
use crate::similarity::SimilarityMeasure;

/// File name of the per-project configuration.
pub const PROJECT_CONFIG_FILE: &str = "cookrank.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Resolve the effective configuration.
    ///
    /// An explicit path (argument or `COOKRANK_CONFIG`) replaces the
    /// global/project lookup; environment overrides always apply last.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let global = Self::global_path();
        Self::load_layers(explicit_path, global.as_deref(), project_root, &|key: &str| {
            std::env::var(key).ok()
        })
    }

    /// [`Config::load`] with the global file and the environment supplied
    /// by the caller.
    fn load_layers(
        explicit_path: Option<&Path>,
        global_path: Option<&Path>,
        project_root: &Path,
        env: EnvLookup<'_>,
    ) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env("COOKRANK_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => {
                    return Err(RankError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = global_path.map(Self::load_patch).transpose()?.flatten() {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides(env)?;

        Ok(config)
    }

    /// Location of the per-user config file, if a config dir exists.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cookrank/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| RankError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| RankError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.recommend {
            self.recommend.merge(patch);
        }
        if let Some(patch) = patch.browse {
            self.browse.merge(patch);
        }
        if let Some(patch) = patch.store {
            self.store.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self, env: EnvLookup<'_>) -> Result<()> {
        if let Some(value) = env_usize(env, "COOKRANK_SEARCH_INDEXED_CAP")? {
            self.search.indexed_cap = value;
        }
        if let Some(value) = env_usize(env, "COOKRANK_SEARCH_SUBSTRING_CAP")? {
            self.search.substring_cap = value;
        }
        if let Some(value) = env_usize(env, "COOKRANK_SEARCH_FUZZY_SAMPLE")? {
            self.search.fuzzy_sample = value;
        }
        if let Some(value) = env_u8(env, "COOKRANK_SEARCH_FUZZY_THRESHOLD")? {
            self.search.fuzzy_threshold = value;
        }
        if let Some(value) = env_usize(env, "COOKRANK_SEARCH_FUZZY_CAP")? {
            self.search.fuzzy_cap = value;
        }

        if let Some(value) = env_usize(env, "COOKRANK_RECOMMEND_LIMIT")? {
            self.recommend.limit = value;
        }
        if let Some(value) = env_string(env, "COOKRANK_RECOMMEND_MEASURE") {
            self.recommend.measure = parse_measure(&value)?;
        }

        if let Some(value) = env_usize(env, "COOKRANK_BROWSE_PAGE_SIZE")? {
            self.browse.page_size = value;
        }

        if let Some(value) = env_string(env, "COOKRANK_STORE_PATH") {
            self.store.path = PathBuf::from(value);
        }

        self.validate()
    }

    /// Reject values that would make paging or thresholds meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.browse.page_size == 0 {
            return Err(RankError::Config("browse.page_size must be at least 1".to_string()));
        }
        if self.search.fuzzy_threshold > crate::similarity::MAX_SCORE {
            return Err(RankError::Config(format!(
                "search.fuzzy_threshold must be within 0..=100, got {}",
                self.search.fuzzy_threshold
            )));
        }
        Ok(())
    }

    /// Render as TOML, as printed by `cookrank config`.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Per-strategy caps of the search aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum ids taken from the full-text index
    #[serde(default = "default_indexed_cap")]
    pub indexed_cap: usize,
    /// Maximum substring matches
    #[serde(default = "default_substring_cap")]
    pub substring_cap: usize,
    /// How many corpus items the fuzzy pass looks at
    #[serde(default = "default_fuzzy_sample")]
    pub fuzzy_sample: usize,
    /// Fuzzy scores must be strictly greater than this
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: u8,
    /// Maximum fuzzy matches
    #[serde(default = "default_fuzzy_cap")]
    pub fuzzy_cap: usize,
}

const fn default_indexed_cap() -> usize {
    10
}

const fn default_substring_cap() -> usize {
    10
}

const fn default_fuzzy_sample() -> usize {
    50
}

const fn default_fuzzy_threshold() -> u8 {
    70
}

const fn default_fuzzy_cap() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            indexed_cap: default_indexed_cap(),
            substring_cap: default_substring_cap(),
            fuzzy_sample: default_fuzzy_sample(),
            fuzzy_threshold: default_fuzzy_threshold(),
            fuzzy_cap: default_fuzzy_cap(),
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.indexed_cap {
            self.indexed_cap = value;
        }
        if let Some(value) = patch.substring_cap {
            self.substring_cap = value;
        }
        if let Some(value) = patch.fuzzy_sample {
            self.fuzzy_sample = value;
        }
        if let Some(value) = patch.fuzzy_threshold {
            self.fuzzy_threshold = value;
        }
        if let Some(value) = patch.fuzzy_cap {
            self.fuzzy_cap = value;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_recommend_limit")]
    pub limit: usize,
    #[serde(default)]
    pub measure: SimilarityMeasure,
    #[serde(default)]
    pub recipe_weights: RecipeWeights,
    #[serde(default)]
    pub blog_weights: BlogWeights,
}

const fn default_recommend_limit() -> usize {
    crate::recommend::DEFAULT_LIMIT
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            limit: default_recommend_limit(),
            measure: SimilarityMeasure::default(),
            recipe_weights: RecipeWeights::default(),
            blog_weights: BlogWeights::default(),
        }
    }
}

impl RecommendConfig {
    fn merge(&mut self, patch: RecommendPatch) {
        if let Some(value) = patch.limit {
            self.limit = value;
        }
        if let Some(value) = patch.measure {
            self.measure = value;
        }
        if let Some(patch) = patch.recipe_weights {
            if let Some(value) = patch.title {
                self.recipe_weights.title = value;
            }
            if let Some(value) = patch.description {
                self.recipe_weights.description = value;
            }
            if let Some(value) = patch.ingredients {
                self.recipe_weights.ingredients = value;
            }
        }
        if let Some(patch) = patch.blog_weights {
            if let Some(value) = patch.title {
                self.blog_weights.title = value;
            }
            if let Some(value) = patch.description {
                self.blog_weights.description = value;
            }
            if let Some(value) = patch.category {
                self.blog_weights.category = value;
            }
            if let Some(value) = patch.tags {
                self.blog_weights.tags = value;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

const fn default_page_size() -> usize {
    12
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl BrowseConfig {
    fn merge(&mut self, patch: BrowsePatch) {
        if let Some(value) = patch.page_size {
            self.page_size = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// `.json` files load into memory; anything else opens as SQLite
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("cookrank.db")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    fn merge(&mut self, patch: StorePatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub search: Option<SearchPatch>,
    pub recommend: Option<RecommendPatch>,
    pub browse: Option<BrowsePatch>,
    pub store: Option<StorePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub indexed_cap: Option<usize>,
    pub substring_cap: Option<usize>,
    pub fuzzy_sample: Option<usize>,
    pub fuzzy_threshold: Option<u8>,
    pub fuzzy_cap: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RecommendPatch {
    pub limit: Option<usize>,
    pub measure: Option<SimilarityMeasure>,
    pub recipe_weights: Option<RecipeWeightsPatch>,
    pub blog_weights: Option<BlogWeightsPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RecipeWeightsPatch {
    pub title: Option<f64>,
    pub description: Option<f64>,
    pub ingredients: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BlogWeightsPatch {
    pub title: Option<f64>,
    pub description: Option<f64>,
    pub category: Option<f64>,
    pub tags: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BrowsePatch {
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StorePatch {
    pub path: Option<PathBuf>,
}

fn parse_measure(value: &str) -> Result<SimilarityMeasure> {
    SimilarityMeasure::from_name(value).ok_or_else(|| {
        RankError::Config(format!(
            "invalid COOKRANK_RECOMMEND_MEASURE value {value}: expected ratio or partial"
        ))
    })
}

/// Reads one environment variable; tests substitute a fixed table.
type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn env_string(env: EnvLookup<'_>, key: &str) -> Option<String> {
    env(key)
}

fn env_usize(env: EnvLookup<'_>, key: &str) -> Result<Option<usize>> {
    env(key)
        .map(|value| {
            value.trim().parse::<usize>().map_err(|err| {
                RankError::Config(format!("invalid {key} value {value}: {err}"))
            })
        })
        .transpose()
}

fn env_u8(env: EnvLookup<'_>, key: &str) -> Result<Option<u8>> {
    env(key)
        .map(|value| {
            value.trim().parse::<u8>().map_err(|err| {
                RankError::Config(format!("invalid {key} value {value}: {err}"))
            })
        })
        .transpose()
}
