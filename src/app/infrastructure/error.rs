use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown theme: '{0}'")]
    UnknownTheme(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Page error: {0}")]
    Page(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
