//! Line splitting and marker classification.
//!
//! A marker line is a SQL comment carrying a block keyword:
//!
//! ```text
//! -- #start# <tag>
//! -- #end# <tag>
//! ```
//!
//! Keywords match case-insensitively and leading whitespace is permitted.
//! The tag is the remainder of the line, trimmed.

use regex::Regex;
use std::sync::LazyLock;

static START_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*--\s*#start#").expect("Invalid start marker regex"));

static END_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*--\s*#end#").expect("Invalid end marker regex"));

static START_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#start#").expect("Invalid start token regex"));

static END_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#end#").expect("Invalid end token regex"));

/// Which marker keyword a line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MarkerKind {
    Start,
    End,
}

impl MarkerKind {
    /// Canonical keyword text, used in malformed-tag diagnostics.
    pub(crate) fn token(self) -> &'static str {
        match self {
            MarkerKind::Start => "#start#",
            MarkerKind::End => "#end#",
        }
    }

    fn token_regex(self) -> &'static Regex {
        match self {
            MarkerKind::Start => &START_TOKEN_REGEX,
            MarkerKind::End => &END_TOKEN_REGEX,
        }
    }
}

/// A classified marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MarkerLine<'a> {
    pub kind: MarkerKind,
    /// Trimmed tag text with original casing; empty when the tag is missing.
    pub tag: &'a str,
    /// 1-based column just past the marker keyword.
    pub column: usize,
}

/// Split content into lines, accepting `\r\n`, `\n` and `\r` terminators.
///
/// Blank lines are preserved so line numbers stay stable; callers decide
/// whether to skip them.
pub(crate) fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&content[start..]);
    lines
}

/// Classify one line as a marker, or `None` for plain content.
pub(crate) fn classify(text: &str) -> Option<MarkerLine<'_>> {
    let kind = if START_LINE_REGEX.is_match(text) {
        MarkerKind::Start
    } else if END_LINE_REGEX.is_match(text) {
        MarkerKind::End
    } else {
        return None;
    };

    // The line regex matched, so the token regex must find the keyword.
    let token = kind.token_regex().find(text)?;
    Some(MarkerLine {
        kind,
        tag: text[token.end()..].trim(),
        column: token.end() + 1,
    })
}
