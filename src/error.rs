use thiserror::Error;

/// Errors raised by the article store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required input was missing. The message is safe to show to clients.
    #[error("{0}")]
    Validation(String),

    #[error("Article not found")]
    NotFound,

    #[error("Failed to persist articles: {0}")]
    Persistence(#[from] PersistError),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Errors from reading or writing the JSON data file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
