use crate::api::{SnipzApi, SnipzPaths};
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use crate::store::sqlite::SqliteStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the data directory (config and default database).
pub const HOME_ENV: &str = "SNIPZ_HOME";
/// Overrides the database file.
pub const DB_ENV: &str = "SNIPZ_DB";

const DB_FILENAME: &str = "snippets.db";

pub struct SnipzContext {
    pub api: SnipzApi<SqliteStore>,
    pub config: SnipzConfig,
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "snipz", "snipz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Api("Could not determine a data directory".to_string()))
}

/// Resolves where config and data live.
///
/// The database is, in order: `db_override`, `$SNIPZ_DB`, then
/// `<data dir>/snippets.db`. The data directory is `$SNIPZ_HOME` or the
/// platform data dir.
pub fn resolve_paths(db_override: Option<&Path>) -> Result<SnipzPaths> {
    let data_dir = match env_path(HOME_ENV) {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let db_path = db_override
        .map(Path::to_path_buf)
        .or_else(|| env_path(DB_ENV))
        .unwrap_or_else(|| data_dir.join(DB_FILENAME));

    Ok(SnipzPaths::new(data_dir, db_path))
}

/// Opens the store at `paths.db_path` and loads the config.
pub fn initialize(paths: SnipzPaths) -> Result<SnipzContext> {
    let config = SnipzConfig::load(&paths.data_dir)?;
    let store = SqliteStore::open(&paths.db_path)?;

    Ok(SnipzContext {
        api: SnipzApi::new(store, paths),
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SnippetDraft;

    #[test]
    fn initialize_creates_the_database() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SnipzPaths::new(dir.path().to_path_buf(), dir.path().join("nested/s.db"));

        let mut ctx = initialize(paths).unwrap();
        ctx.api
            .add_snippet(SnippetDraft::new("hello", "world"))
            .unwrap();

        assert!(dir.path().join("nested/s.db").exists());
        assert_eq!(ctx.config, SnipzConfig::default());
    }

    #[test]
    fn initialize_reports_a_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();
        let paths = SnipzPaths::new(dir.path().to_path_buf(), dir.path().join("s.db"));

        assert!(initialize(paths).is_err());
    }

    #[test]
    fn explicit_db_override_wins() {
        let paths = resolve_paths(Some(Path::new("/tmp/elsewhere.db"))).unwrap();
        assert_eq!(paths.db_path, PathBuf::from("/tmp/elsewhere.db"));
    }
}
