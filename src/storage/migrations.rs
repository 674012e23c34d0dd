//! Schema migrations for the SQLite content store
//!
//! Each entry runs once; `PRAGMA user_version` records how many have been
//! applied.

use rusqlite::Connection;
use tracing::debug;

use crate::error::{RankError, Result};

const CREATE_CONTENT: &str = "
CREATE TABLE IF NOT EXISTS content (
    id          TEXT PRIMARY KEY,
    kind        TEXT NOT NULL CHECK (kind IN ('recipe', 'blog')),
    slug        TEXT,
    published   INTEGER NOT NULL DEFAULT 1,
    created_at  TEXT NOT NULL,
    document    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_content_listing
    ON content (kind, published, created_at DESC);
";

const ADD_SLUG_INDEX: &str = "
CREATE UNIQUE INDEX IF NOT EXISTS idx_content_slug
    ON content (slug) WHERE slug IS NOT NULL;
";

const MIGRATIONS: [&str; 2] = [CREATE_CONTENT, ADD_SLUG_INDEX];

pub const SCHEMA_VERSION: u32 = 2;

/// Bring the database up to [`SCHEMA_VERSION`]
pub fn run_migrations(conn: &Connection) -> Result<u32> {
    let current_version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(|err| RankError::Migration(err.to_string()))?;

    for (target_version, sql) in (1..=SCHEMA_VERSION).zip(MIGRATIONS) {
        if current_version >= target_version {
            continue;
        }

        conn.execute_batch(sql).map_err(|err| {
            RankError::Migration(format!("migration {target_version} failed: {err}"))
        })?;
        conn.pragma_update(None, "user_version", target_version)
            .map_err(|err| {
                RankError::Migration(format!(
                    "failed to set user_version {target_version}: {err}"
                ))
            })?;
        debug!(version = target_version, "applied store migration");
    }

    Ok(SCHEMA_VERSION)
}
