//! Tagged-block SQL parsing for sqlvault.
//!
//! Scans named SQL sources for comment-tagged blocks and collects them into
//! a case-insensitive statement registry:
//!
//! ```text
//! -- #start# GetAllUsers
//! SELECT *
//! FROM users
//! -- #end# GetAllUsers
//! ```
//!
//! Marker keywords are case-insensitive and may be preceded by whitespace;
//! the tag is everything after the keyword, trimmed, with its casing
//! preserved for display. Block bodies are opaque text: nothing here
//! validates or executes SQL.
//!
//! Parsing is all-or-nothing. Every problem found across every source is
//! recorded as a [`Diagnostic`] and scanning continues, so one run reports
//! all problems at once. The registry is committed only when the run
//! produced zero diagnostics; otherwise [`parse_sources`] fails with the
//! full [`ParseReport`].

pub mod diagnostics;
pub mod error;
pub mod parse;
pub mod registry;
pub mod source;

mod scan;
mod tracker;

pub use diagnostics::{Diagnostic, DiagnosticKind, ParseReport};
pub use error::{Error, Result};
pub use parse::{parse_sources, parse_str};
pub use registry::{ParsedSql, SqlRegistry};
pub use source::SqlSource;
