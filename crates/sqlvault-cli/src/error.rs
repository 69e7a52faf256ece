//! Error types for the sqlvault CLI

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] sqlvault_fs::Error),

    #[error(transparent)]
    Parse(#[from] sqlvault_parser::ParseReport),

    #[error(transparent)]
    Registry(#[from] sqlvault_parser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
