//! Error types for sqlvault-parser

use crate::diagnostics::ParseReport;

/// Result type for sqlvault-parser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sqlvault-parser operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parse run produced diagnostics; no registry was committed.
    #[error("{0}")]
    Parse(#[from] ParseReport),

    #[error("The given tag '{tag}' is not present in the collection.")]
    TagNotFound { tag: String },
}
