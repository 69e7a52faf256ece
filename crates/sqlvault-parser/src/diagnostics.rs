//! Parse diagnostics: structured problems with optional location data.
//!
//! Diagnostics are plain data throughout a parse run. Recording one never
//! aborts a scan; only the orchestrator turns a non-empty [`ParseReport`]
//! into a failure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a parse problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A marker line whose tag text is empty or missing.
    MalformedMarkerTag,
    /// The same tag started twice anywhere in the run, case-insensitively.
    DuplicateTag,
    /// An end marker with no open block for its tag.
    UnmatchedEnd,
    /// A tracked block whose start marker was never seen.
    MissingStart,
    /// A tracked block whose end marker was never seen.
    MissingEnd,
    /// A matched block with no non-blank content.
    EmptyBlock,
}

/// One parse problem, optionally located by source, line and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Human-readable description, without location qualification.
    pub message: String,
    pub source: Option<String>,
    /// 1-based line number within the source.
    pub line: Option<usize>,
    /// 1-based column within the line.
    pub column: Option<usize>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            line: None,
            column: None,
        }
    }

    pub(crate) fn in_source(mut self, source: Option<&str>) -> Self {
        self.source = source.map(str::to_string);
        self
    }

    pub(crate) fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub(crate) fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Renders the most specific location the diagnostic carries.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = &self.message;
        match (self.source.as_deref(), self.line, self.column) {
            (Some(src), Some(line), Some(col)) => {
                write!(f, "{src}:(line {line}, col {col}): error: {msg}")
            }
            (None, Some(line), Some(col)) => {
                write!(f, "Parsing error (line {line}, col {col}): error: {msg}")
            }
            (Some(src), Some(line), None) => write!(f, "{src}:(line {line}): error: {msg}"),
            (None, Some(line), None) => write!(f, "Parsing error (line {line}): error: {msg}"),
            (Some(src), None, _) => write!(f, "{src}: error: {msg}"),
            (None, None, _) => write!(f, "Parsing error: {msg}"),
        }
    }
}

/// Every problem found in one parse run, in the order raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether any recorded diagnostic has the given kind.
    pub fn contains_kind(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }
}

impl fmt::Display for ParseReport {
    /// One rendered diagnostic per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseReport {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn diag() -> Diagnostic {
        Diagnostic::new(DiagnosticKind::EmptyBlock, "SQL block 'demo' is empty.")
    }

    #[rstest]
    #[case(
        diag().in_source(Some("users.sql")).at(3, 11),
        "users.sql:(line 3, col 11): error: SQL block 'demo' is empty."
    )]
    #[case(
        diag().at(3, 11),
        "Parsing error (line 3, col 11): error: SQL block 'demo' is empty."
    )]
    #[case(
        diag().in_source(Some("users.sql")).at_line(3),
        "users.sql:(line 3): error: SQL block 'demo' is empty."
    )]
    #[case(
        diag().at_line(3),
        "Parsing error (line 3): error: SQL block 'demo' is empty."
    )]
    #[case(
        diag().in_source(Some("users.sql")),
        "users.sql: error: SQL block 'demo' is empty."
    )]
    #[case(diag(), "Parsing error: SQL block 'demo' is empty.")]
    fn renders_most_specific_location(#[case] diagnostic: Diagnostic, #[case] expected: &str) {
        assert_eq!(diagnostic.to_string(), expected);
    }

    #[test]
    fn report_joins_diagnostics_with_newlines() {
        let mut report = ParseReport::default();
        report.push(diag().at_line(1));
        report.push(diag().at_line(2));
        assert_eq!(
            report.to_string(),
            "Parsing error (line 1): error: SQL block 'demo' is empty.\n\
             Parsing error (line 2): error: SQL block 'demo' is empty."
        );
    }

    #[test]
    fn contains_kind_reflects_recorded_diagnostics() {
        let mut report = ParseReport::default();
        report.push(diag());
        assert!(report.contains_kind(DiagnosticKind::EmptyBlock));
        assert!(!report.contains_kind(DiagnosticKind::DuplicateTag));
    }
}
