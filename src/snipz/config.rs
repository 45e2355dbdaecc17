use crate::error::{Result, SnipzError};
use crate::highlight::{is_known_theme, theme_names, DEFAULT_THEME};
use crate::language::Language;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_DEFAULT_LANGUAGE: &str = "default-language";
pub const KEY_THEME: &str = "theme";
pub const KEYS: &[&str] = &[KEY_DEFAULT_LANGUAGE, KEY_THEME];

/// Configuration for snipz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SnipzConfig {
    /// Language assigned to new snippets that do not name one
    #[serde(
        default,
        alias = "default_language",
        deserialize_with = "lenient_language"
    )]
    pub default_language: Language,

    /// Highlighting theme (any theme bundled with syntect)
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// Unknown names read as plain text, as stored snippet languages do, so a
/// stale config never blocks startup.
fn lenient_language<'de, D>(deserializer: D) -> std::result::Result<Language, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Language::from_stored(&raw))
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            default_language: Language::PlainText,
            theme: default_theme(),
        }
    }
}

impl SnipzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SnipzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            KEY_DEFAULT_LANGUAGE => Ok(self.default_language.to_string()),
            KEY_THEME => Ok(self.theme.clone()),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets a key from its string form, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DEFAULT_LANGUAGE => {
                self.default_language = value
                    .parse::<Language>()
                    .map_err(|e| SnipzError::validation(e.to_string()))?;
            }
            KEY_THEME => {
                if !is_known_theme(value) {
                    return Err(SnipzError::validation(format!(
                        "unknown theme '{}' (available: {})",
                        value,
                        theme_names().join(", ")
                    )));
                }
                self.theme = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }
}

fn unknown_key(key: &str) -> SnipzError {
    SnipzError::validation(format!(
        "unknown config key '{}' (known keys: {})",
        key,
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnipzConfig::default();
        assert_eq!(config.default_language, Language::PlainText);
        assert_eq!(config.theme, DEFAULT_THEME);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = SnipzConfig::default();
        config.set(KEY_DEFAULT_LANGUAGE, "py").unwrap();
        assert_eq!(config.get(KEY_DEFAULT_LANGUAGE).unwrap(), "python");

        config.set(KEY_THEME, "InspiredGitHub").unwrap();
        assert_eq!(config.get(KEY_THEME).unwrap(), "InspiredGitHub");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = SnipzConfig::default();
        assert!(config.set(KEY_DEFAULT_LANGUAGE, "klingon").is_err());
        assert!(config.set(KEY_THEME, "no-such-theme").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, SnipzConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = SnipzConfig::load(dir.path()).unwrap();
        assert_eq!(config, SnipzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("snipz");

        let mut config = SnipzConfig::default();
        config.set(KEY_DEFAULT_LANGUAGE, "rust").unwrap();
        config.save(&target).unwrap();

        let loaded = SnipzConfig::load(&target).unwrap();
        assert_eq!(loaded.default_language, Language::Rust);
    }

    #[test]
    fn test_file_uses_documented_key_names() {
        let mut config = SnipzConfig::default();
        config.set(KEY_DEFAULT_LANGUAGE, "rust").unwrap();
        let raw: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert_eq!(raw["default-language"], "rust");
        assert_eq!(raw["theme"], DEFAULT_THEME);

        let edited: SnipzConfig = serde_json::from_str(r#"{"default-language":"go"}"#).unwrap();
        assert_eq!(edited.default_language, Language::Go);

        let legacy: SnipzConfig = serde_json::from_str(r#"{"default_language":"ruby"}"#).unwrap();
        assert_eq!(legacy.default_language, Language::Ruby);
    }

    #[test]
    fn test_unknown_language_in_file_reads_as_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"default-language":"cobol","theme":"InspiredGitHub"}"#,
        )
        .unwrap();

        let config = SnipzConfig::load(dir.path()).unwrap();
        assert_eq!(config.default_language, Language::PlainText);
        assert_eq!(config.theme, "InspiredGitHub");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: SnipzConfig = serde_json::from_str(r#"{"theme":"InspiredGitHub"}"#).unwrap();
        assert_eq!(config.default_language, Language::PlainText);
        assert_eq!(config.theme, "InspiredGitHub");
    }
}
