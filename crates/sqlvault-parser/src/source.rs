//! Named input units for the parser.

use serde::{Deserialize, Serialize};

/// One unit of SQL text subjected to a parse run.
///
/// The name is used only to attribute diagnostics; anonymous sources render
/// their diagnostics with a plain `Parsing error` location instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlSource {
    /// Display name, typically the file name the content was read from.
    pub name: Option<String>,
    /// The raw text to scan. Any mix of `\r\n`, `\n` and `\r` line endings.
    pub content: String,
}

impl SqlSource {
    /// Create a named source.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            content: content.into(),
        }
    }

    /// Create a source with no name, e.g. for inline strings.
    pub fn anonymous(content: impl Into<String>) -> Self {
        Self {
            name: None,
            content: content.into(),
        }
    }
}
