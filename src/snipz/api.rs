//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! snippet operations, whichever UI is driving them.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run` function
//! - **Normalizes inputs** (id strings such as `12` or `#12` become [`SnippetId`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no terminal I/O and no formatting; that is the CLI's job.
//!
//! `SnipzApi<S: DataStore>` is generic over the backend: the binary uses
//! `SnipzApi<SqliteStore>`, tests use `SnipzApi<InMemoryStore>`.

use crate::commands;
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use crate::language::Language;
use crate::model::{SnippetDraft, SnippetId, SnippetQuery};
use crate::store::DataStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, SnipzPaths};

pub struct SnipzApi<S: DataStore> {
    store: S,
    paths: SnipzPaths,
}

impl<S: DataStore> SnipzApi<S> {
    pub fn new(store: S, paths: SnipzPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_snippet(&mut self, draft: SnippetDraft) -> Result<CmdResult> {
        let config = self.load_config()?;
        commands::add::run(&mut self.store, draft, config.default_language)
    }

    pub fn delete_snippets<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn search_snippets(&self, query: SnippetQuery) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn list_snippets(&self) -> Result<CmdResult> {
        commands::search::run(&self.store, SnippetQuery::all())
    }

    pub fn view_snippets<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::view::run(&self.store, &ids)
    }

    pub fn list_tags(&self) -> Result<CmdResult> {
        commands::tags::run(&self.store)
    }

    pub fn languages(&self) -> &'static [Language] {
        Language::ALL
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn load_config(&self) -> Result<SnipzConfig> {
        SnipzConfig::load(&self.paths.data_dir)
    }

    pub fn paths(&self) -> &SnipzPaths {
        &self.paths
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn parse_id(input: &str) -> Result<SnippetId> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    digits
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .map(SnippetId)
        .ok_or_else(|| SnipzError::validation(format!("'{}' is not a snippet id", input)))
}

fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<SnippetId>> {
    inputs.iter().map(|s| parse_id(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEY_DEFAULT_LANGUAGE;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api_with(store: InMemoryStore) -> (SnipzApi<InMemoryStore>, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let paths = SnipzPaths::new(dir.path().to_path_buf(), dir.path().join("snippets.db"));
        (SnipzApi::new(store, paths), dir)
    }

    #[test]
    fn parses_plain_and_hashed_ids() {
        assert_eq!(parse_id("12").unwrap(), SnippetId(12));
        assert_eq!(parse_id("#7").unwrap(), SnippetId(7));
        assert!(parse_id("0").unwrap_err().is_validation());
        assert!(parse_id("abc").unwrap_err().is_validation());
        assert!(parse_id("-3").is_err());
    }

    #[test]
    fn add_uses_configured_default_language() {
        let (mut api, _dir) = api_with(InMemoryStore::new());
        api.config(ConfigAction::Set(KEY_DEFAULT_LANGUAGE.into(), "go".into()))
            .unwrap();

        let result = api.add_snippet(SnippetDraft::new("main", "package main")).unwrap();
        assert_eq!(result.affected_snippets[0].language, Language::Go);
    }

    #[test]
    fn view_and_delete_accept_id_strings() {
        let (mut api, _dir) = api_with(
            StoreFixture::new()
                .with_snippet("one", "1", &[])
                .with_snippet("two", "2", &[])
                .store,
        );

        let viewed = api.view_snippets(&["#2"]).unwrap();
        assert_eq!(viewed.listed_snippets[0].title, "two");

        api.delete_snippets(&["1"]).unwrap();
        let left = api.list_snippets().unwrap();
        assert_eq!(left.listed_snippets.len(), 1);
    }

    #[test]
    fn bad_id_fails_before_touching_the_store() {
        let (mut api, _dir) = api_with(StoreFixture::new().with_snippets(2).store);
        assert!(api.delete_snippets(&["1", "x"]).is_err());
        assert_eq!(api.into_store().search(&SnippetQuery::all()).unwrap().len(), 2);
    }

    #[test]
    fn languages_lists_every_variant() {
        let (api, _dir) = api_with(InMemoryStore::new());
        assert!(api.languages().contains(&Language::PlainText));
        assert!(api.languages().contains(&Language::Python));
    }
}
