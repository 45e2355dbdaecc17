use crate::config::SnipzConfig;
use crate::model::Snippet;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod search;
pub mod tags;
pub mod view;

/// Filesystem locations used by a snipz session.
#[derive(Debug, Clone)]
pub struct SnipzPaths {
    /// Directory holding `config.json` (and the database by default)
    pub data_dir: PathBuf,
    /// The SQLite database file
    pub db_path: PathBuf,
}

impl SnipzPaths {
    pub fn new(data_dir: PathBuf, db_path: PathBuf) -> Self {
        Self { data_dir, db_path }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. UIs decide how to present it.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Snippets created or removed by the command
    pub affected_snippets: Vec<Snippet>,
    /// Snippets to display, in display order
    pub listed_snippets: Vec<Snippet>,
    pub tags: Vec<String>,
    pub config: Option<SnipzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.affected_snippets = snippets;
        self
    }

    pub fn with_listed_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.listed_snippets = snippets;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_config(mut self, config: SnipzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
