//! Errors for the ranking core, the stores and the CLI
//!
//! Every [`RankError`] maps to a stable [`ErrorCode`]. In JSON output mode
//! the error is rendered as a [`StructuredError`] carrying that code, a
//! category and a recovery hint.

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::{suggest_for_error, suggest_similar_ids};

/// Main error type for cookrank operations.
#[derive(Error, Debug)]
pub enum RankError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Content not found: {id}")]
    ContentNotFound {
        id: String,
        suggestions: Vec<String>,
    },

    #[error("Content kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: String, found: String },

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Search index error: {0}")]
    SearchIndex(#[from] tantivy::TantivyError),

    #[error("Query parse error: {0}")]
    QueryParse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl RankError {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::ContentNotFound { .. } => ErrorCode::ContentNotFound,
            Self::KindMismatch { .. } => ErrorCode::KindMismatch,
            Self::Store(_) => ErrorCode::StoreError,
            Self::SearchIndex(_) => ErrorCode::IndexError,
            Self::QueryParse(_) => ErrorCode::SearchQueryInvalid,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Toml(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Migration(_) => ErrorCode::MigrationFailed,
            Self::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Extra fields for the JSON error body, when the variant has any.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::ContentNotFound { id, suggestions } => Some(serde_json::json!({
                "content_id": id,
                "similar": suggestions,
            })),
            Self::KindMismatch { expected, found } => {
                Some(serde_json::json!({ "expected": expected, "found": found }))
            }
            Self::InvalidArgument(reason) => Some(serde_json::json!({ "reason": reason })),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_rank_error(self)
    }
}

/// Machine-readable form of a [`RankError`]
///
/// This is the body of the `error` object in JSON output; `code` is the
/// stable field scripts should branch on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    pub code: ErrorCode,
    /// Same code as a number, e.g. 101 for `CONTENT_NOT_FOUND`
    pub numeric_code: u16,
    pub message: String,
    /// Recovery hint, specialised from `context` when possible
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    pub recoverable: bool,
    /// Coarse grouping such as "content" or "storage"
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn from_rank_error(err: &RankError) -> Self {
        let code = err.code();
        let context = err.context();

        Self {
            suggestion: suggest_for_error(code, context.as_ref()),
            numeric_code: code.numeric(),
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            message: err.to_string(),
            context,
            code,
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&RankError> for StructuredError {
    fn from(err: &RankError) -> Self {
        Self::from_rank_error(err)
    }
}

/// Result type alias using `RankError`.
pub type Result<T> = std::result::Result<T, RankError>;
