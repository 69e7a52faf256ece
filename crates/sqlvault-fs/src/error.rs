//! Error types for sqlvault-fs

use std::path::PathBuf;

/// Result type for sqlvault-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading SQL sources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: error: No such directory exists.", .path.display())]
    DirectoryNotFound { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
