//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way snippets reach disk. Business logic
//! in `commands/` is written against the trait, so it runs unchanged over:
//!
//! - [`sqlite::SqliteStore`]: the production store, one SQLite file holding a
//!   `snippets` table and a `snippet_tags` child table.
//! - [`memory::InMemoryStore`]: no persistence, used by command tests.
//!
//! ## Guarantees
//!
//! Both implementations hand out ids that are never reused, return search
//! results newest first (ties broken by the higher id), and treat a missing id
//! as a normal outcome (`None` / `false`) rather than an error.

use crate::error::Result;
use crate::model::{NewSnippet, Snippet, SnippetId, SnippetQuery};
use std::collections::BTreeSet;

pub mod memory;
mod schema;
pub mod sqlite;

pub trait DataStore {
    /// Persist a validated snippet, assigning its id and creation time.
    fn insert(&mut self, snippet: NewSnippet) -> Result<Snippet>;

    fn get(&self, id: SnippetId) -> Result<Option<Snippet>>;

    /// Remove a snippet and its tags. Returns whether anything was removed.
    fn delete(&mut self, id: SnippetId) -> Result<bool>;

    /// Snippets matching the query, most recent first.
    fn search(&self, query: &SnippetQuery) -> Result<Vec<Snippet>>;

    /// Union of the tags of every stored snippet.
    fn list_tags(&self) -> Result<BTreeSet<String>>;
}
