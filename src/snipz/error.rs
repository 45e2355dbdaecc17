use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Storage failure: {0}")]
    StorageIo(std::io::Error),

    #[error("Storage failure: corrupt record: {0}")]
    Corrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("{0}")]
    Api(String),
}

impl SnipzError {
    pub fn validation(msg: impl Into<String>) -> Self {
        SnipzError::Validation(msg.into())
    }

    /// True for failures of the underlying database file.
    pub fn is_storage(&self) -> bool {
        matches!(self, SnipzError::Storage(_) | SnipzError::StorageIo(_) | SnipzError::Corrupt(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SnipzError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, SnipzError>;
