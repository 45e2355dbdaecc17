use super::schema::MIGRATIONS;
use super::DataStore;
use crate::error::{Result, SnipzError};
use crate::language::Language;
use crate::model::{creation_time, NewSnippet, Snippet, SnippetId, SnippetQuery};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a write waits for another process holding the database lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SELECT_COLUMNS: &str = "SELECT id, title, content, language, description, created_at FROM snippets";

/// SQLite-backed snippet store.
///
/// Owns a single connection for its whole lifetime. Writes run in IMMEDIATE
/// transactions and reads in a transaction of their own, so a reader in
/// another process sees a write either completely or not at all.
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(SnipzError::StorageIo)?;
            }
        }

        let conn = Connection::open(path)?;
        // WAL keeps readers off the writer's lock; the reported mode is not needed.
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })?;
        let store = Self::prepare(conn, Some(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), "opened snippet database");
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::prepare(Connection::open_in_memory()?, None)
    }

    fn prepare(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        for sql in MIGRATIONS {
            conn.execute(sql, [])?;
        }
        Ok(Self { conn, path })
    }

    /// Location of the database file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Releases the database handle, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        let path = self.path.clone();
        self.conn.close().map_err(|(_, err)| SnipzError::Storage(err))?;
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "closed snippet database");
        }
        Ok(())
    }
}

struct SnippetRow {
    id: i64,
    title: String,
    content: String,
    language: String,
    description: String,
    created_at: String,
}

impl SnippetRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            language: row.get(3)?,
            description: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn into_snippet(self, tags: BTreeSet<String>) -> Result<Snippet> {
        Ok(Snippet {
            id: SnippetId(self.id),
            title: self.title,
            content: self.content,
            language: Language::from_stored(&self.language),
            description: self.description,
            tags,
            created_at: parse_timestamp(self.id, &self.created_at)?,
        })
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(id: i64, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| SnipzError::Corrupt(format!("snippet {} has bad created_at '{}': {}", id, raw, e)))
}

fn load_tags(conn: &Connection, id: i64) -> Result<BTreeSet<String>> {
    let mut stmt = conn.prepare_cached("SELECT tag FROM snippet_tags WHERE snippet_id = ?1")?;
    let tags = stmt
        .query_map(params![id], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<BTreeSet<String>>>()?;
    Ok(tags)
}

impl DataStore for SqliteStore {
    fn insert(&mut self, snippet: NewSnippet) -> Result<Snippet> {
        let created_at = creation_time();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "
            INSERT INTO snippets (title, content, language, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
            params![
                snippet.title(),
                snippet.content(),
                snippet.language().name(),
                snippet.description(),
                format_timestamp(&created_at),
            ],
        )?;
        let id = tx.last_insert_rowid();

        {
            let mut stmt =
                tx.prepare_cached("INSERT INTO snippet_tags (snippet_id, tag) VALUES (?1, ?2)")?;
            for tag in snippet.tags() {
                stmt.execute(params![id, tag])?;
            }
        }
        tx.commit()?;

        tracing::debug!(id, tags = snippet.tags().len(), "inserted snippet");
        Ok(snippet.into_snippet(SnippetId(id), created_at))
    }

    fn get(&self, id: SnippetId) -> Result<Option<Snippet>> {
        let tx = self.conn.unchecked_transaction()?;
        let row = tx
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id.0],
                SnippetRow::read,
            )
            .optional()?;

        let snippet = match row {
            Some(row) => {
                let tags = load_tags(&tx, row.id)?;
                Some(row.into_snippet(tags)?)
            }
            None => None,
        };
        tx.commit()?;
        Ok(snippet)
    }

    fn delete(&mut self, id: SnippetId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let removed = tx.execute("DELETE FROM snippets WHERE id = ?1", params![id.0])?;
        tx.commit()?;

        tracing::debug!(id = id.0, removed, "delete snippet");
        Ok(removed > 0)
    }

    fn search(&self, query: &SnippetQuery) -> Result<Vec<Snippet>> {
        let tx = self.conn.unchecked_transaction()?;
        let rows = {
            let mut stmt = tx.prepare(&format!(
                "{SELECT_COLUMNS} s
                 WHERE ?1 IS NULL OR EXISTS (
                     SELECT 1 FROM snippet_tags t WHERE t.snippet_id = s.id AND t.tag = ?1
                 )
                 ORDER BY s.created_at DESC, s.id DESC"
            ))?;
            let rows = stmt
                .query_map(params![query.tag_term()], SnippetRow::read)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        };

        let mut snippets = Vec::with_capacity(rows.len());
        for row in rows {
            let tags = load_tags(&tx, row.id)?;
            let snippet = row.into_snippet(tags)?;
            if query.matches_text(&snippet) {
                snippets.push(snippet);
            }
        }
        tx.commit()?;

        tracing::debug!(?query, found = snippets.len(), "searched snippets");
        Ok(snippets)
    }

    fn list_tags(&self) -> Result<BTreeSet<String>> {
        let tx = self.conn.unchecked_transaction()?;
        let tags = {
            let mut stmt = tx.prepare("SELECT DISTINCT tag FROM snippet_tags")?;
            let tags = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<rusqlite::Result<BTreeSet<String>>>()?;
            tags
        };
        tx.commit()?;
        Ok(tags)
    }
}
