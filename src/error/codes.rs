//! Stable error codes for JSON output
//!
//! The hundreds digit groups codes by area:
//!
//! | Range | Category   |
//! |-------|------------|
//! | 1xx   | content    |
//! | 2xx   | index      |
//! | 3xx   | config     |
//! | 4xx   | search     |
//! | 6xx   | storage    |
//! | 8xx   | validation |
//! | 9xx   | internal   |

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No recipe or blog post has the requested slug or id
    ContentNotFound,
    /// The handle names an item of the other kind
    KindMismatch,
    IndexError,
    ConfigInvalid,
    SearchQueryInvalid,
    StoreError,
    SerializationError,
    MigrationFailed,
    /// Negative limit, page 0 and similar
    InvalidArgument,
    NotFound,
    IoError,
}

impl ErrorCode {
    pub const ALL: [Self; 11] = [
        Self::ContentNotFound,
        Self::KindMismatch,
        Self::IndexError,
        Self::ConfigInvalid,
        Self::SearchQueryInvalid,
        Self::StoreError,
        Self::SerializationError,
        Self::MigrationFailed,
        Self::InvalidArgument,
        Self::NotFound,
        Self::IoError,
    ];

    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::ContentNotFound => 101,
            Self::KindMismatch => 102,
            Self::IndexError => 201,
            Self::ConfigInvalid => 302,
            Self::SearchQueryInvalid => 401,
            Self::StoreError => 604,
            Self::SerializationError => 605,
            Self::MigrationFailed => 606,
            Self::InvalidArgument => 801,
            Self::NotFound => 905,
            Self::IoError => 906,
        }
    }

    /// Generic recovery hint; see `suggestions` for context-aware ones.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::ContentNotFound => "Run `cookrank browse <kind>` to list available ids and slugs",
            Self::KindMismatch => "Pass the matching kind (recipe or blog) for the referenced item",
            Self::IndexError => "The in-memory text index could not be built. Check the corpus for invalid data",
            Self::ConfigInvalid => "Run `cookrank config` to see current values and check the TOML syntax",
            Self::SearchQueryInvalid => "Simplify the query. Plain words are always accepted",
            Self::StoreError => "The SQLite store reported an error. Re-import with `cookrank import <file>`",
            Self::SerializationError => "A content document is malformed. Validate the JSON input",
            Self::MigrationFailed => "Delete the store file and re-import the corpus",
            Self::InvalidArgument => "Limits must not be negative and pages start at 1. Content ids must be unique within a file",
            Self::NotFound => "Check the file path, or run `cookrank import <file>` to create the store",
            Self::IoError => "Check that the path exists and is readable",
        }
    }

    /// Whether the user can fix the cause without touching the store.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::IndexError | Self::StoreError | Self::SerializationError | Self::MigrationFailed
        )
    }

    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "content",
            2 => "index",
            3 => "config",
            4 => "search",
            6 => "storage",
            8 => "validation",
            9 => "internal",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.numeric())
    }
}
