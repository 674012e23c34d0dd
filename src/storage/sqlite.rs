//! SQLite content store
//!
//! Items are stored whole as JSON documents. The columns beside the
//! document exist only for filtering and ordering.

use std::path::Path;

use chrono::SecondsFormat;
use itertools::Itertools;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use super::ContentStore;
use super::migrations;
use crate::content::{ContentItem, ContentKind};
use crate::error::{RankError, Result};

/// Document store over a single SQLite connection
pub struct SqliteStore {
    conn: Connection,
    schema_version: u32,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::configure_pragmas(&conn)?;
        let schema_version = migrations::run_migrations(&conn)?;
        debug!(path = %path.display(), schema_version, "opened content store");

        Ok(Self {
            conn,
            schema_version,
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let schema_version = migrations::run_migrations(&conn)?;
        Ok(Self {
            conn,
            schema_version,
        })
    }

    #[must_use]
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// Insert or replace one item, keyed by id.
    pub fn upsert(&self, item: &ContentItem) -> Result<()> {
        let document = serde_json::to_string(item)?;
        self.conn.execute(
            "INSERT INTO content (id, kind, slug, published, created_at, document)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                kind=excluded.kind,
                slug=excluded.slug,
                published=excluded.published,
                created_at=excluded.created_at,
                document=excluded.document",
            params![
                item.id,
                item.kind().as_str(),
                item.slug,
                item.is_published(),
                item.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                document,
            ],
        )?;
        Ok(())
    }

    /// Upsert every item in one transaction; returns how many were written.
    pub fn import(&self, items: &[ContentItem]) -> Result<usize> {
        // a batch may replace stored items, never itself
        if let Some(id) = items.iter().map(|item| item.id.as_str()).duplicates().next() {
            return Err(RankError::InvalidArgument(format!(
                "content id {id:?} appears more than once in the import"
            )));
        }
        let tx = self.conn.unchecked_transaction()?;
        for item in items {
            self.upsert(item)?;
        }
        tx.commit()?;
        info!(count = items.len(), "imported content");
        Ok(items.len())
    }

    fn query_documents(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<ContentItem>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| row.get::<_, String>(0))?;
        let mut items = Vec::new();
        for row in rows {
            items.push(serde_json::from_str(&row?)?);
        }
        Ok(items)
    }

    fn query_document(&self, sql: &str, key: &str) -> Result<Option<ContentItem>> {
        let document: Option<String> = self
            .conn
            .query_row(sql, [key], |row| row.get(0))
            .optional()?;
        match document {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA cache_size = -16000;
             PRAGMA temp_store = MEMORY;",
        )?;
        Ok(())
    }
}

impl ContentStore for SqliteStore {
    fn list(&self, kind: ContentKind, limit: usize, offset: usize) -> Result<Vec<ContentItem>> {
        self.query_documents(
            "SELECT document FROM content
             WHERE kind = ?1 AND published = 1
             ORDER BY created_at DESC, rowid ASC
             LIMIT ?2 OFFSET ?3",
            params![
                kind.as_str(),
                i64::try_from(limit).unwrap_or(i64::MAX),
                i64::try_from(offset).unwrap_or(i64::MAX),
            ],
        )
    }

    fn count(&self, kind: ContentKind) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT count(*) FROM content WHERE kind = ?1 AND published = 1",
            [kind.as_str()],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn get(&self, id: &str) -> Result<Option<ContentItem>> {
        self.query_document("SELECT document FROM content WHERE id = ?1", id)
    }

    fn get_by_slug(&self, slug: &str) -> Result<Option<ContentItem>> {
        self.query_document("SELECT document FROM content WHERE slug = ?1", slug)
    }
}
