//! Block lifecycle tracking for one parse run.
//!
//! Tag uniqueness spans every source handed to the run; start/end pairing
//! is scoped to a single source. Tags form a flat namespace, there is no
//! nesting.

use std::collections::{HashMap, HashSet};

use crate::diagnostics::{Diagnostic, DiagnosticKind, ParseReport};
use crate::registry::ParsedSql;
use crate::scan::{self, MarkerKind};
use crate::source::SqlSource;

#[derive(Debug)]
struct BlockState {
    /// Tag text with the casing of the occurrence that opened the block.
    tag: String,
    start_line: usize,
    end_line: usize,
    start_found: bool,
    end_found: bool,
}

/// State machine driving one parse run across its sources.
#[derive(Debug, Default)]
pub(crate) struct BlockTracker {
    /// Lowercased tags seen anywhere in the run so far.
    seen: HashSet<String>,
}

impl BlockTracker {
    /// Scan one source, appending diagnostics to `report` and completed
    /// statements to `candidates`.
    ///
    /// Diagnostics never stop the scan; a single pass reports every problem
    /// in the source.
    pub(crate) fn scan_source(
        &mut self,
        source: &SqlSource,
        report: &mut ParseReport,
        candidates: &mut Vec<ParsedSql>,
    ) {
        let lines = scan::split_lines(&source.content);
        let mut blocks: HashMap<String, BlockState> = HashMap::new();
        // Keys in open order, so end-of-source checks run in start-line order.
        let mut opened: Vec<String> = Vec::new();
        // Tags whose start was rejected as a duplicate; their end markers
        // close nothing but are not stray either.
        let mut duplicate_opens: HashSet<String> = HashSet::new();

        for (index, text) in lines.iter().enumerate() {
            let number = index + 1;
            if text.trim().is_empty() {
                continue;
            }
            let Some(marker) = scan::classify(text) else {
                continue;
            };

            if marker.tag.is_empty() {
                report.push(
                    Diagnostic::new(
                        DiagnosticKind::MalformedMarkerTag,
                        format!(
                            "The tag name is empty in {} declaration.",
                            marker.kind.token()
                        ),
                    )
                    .in_source(source.name.as_deref())
                    .at(number, marker.column),
                );
                continue;
            }

            let key = marker.tag.to_lowercase();
            match marker.kind {
                MarkerKind::Start => {
                    if self.seen.contains(&key) {
                        // The message shows the casing of this occurrence,
                        // not the one that won the tag.
                        report.push(
                            Diagnostic::new(
                                DiagnosticKind::DuplicateTag,
                                format!(
                                    "Duplicate tag '{}' found. Each tag must be unique.",
                                    marker.tag
                                ),
                            )
                            .in_source(source.name.as_deref())
                            .at(number, marker.column),
                        );
                        duplicate_opens.insert(key);
                    } else {
                        self.seen.insert(key.clone());
                        opened.push(key.clone());
                        blocks.insert(
                            key,
                            BlockState {
                                tag: marker.tag.to_string(),
                                start_line: number,
                                end_line: 0,
                                start_found: true,
                                end_found: false,
                            },
                        );
                    }
                }
                MarkerKind::End => match blocks.get_mut(&key) {
                    Some(state) if state.start_found => {
                        state.end_line = number;
                        state.end_found = true;
                    }
                    _ if duplicate_opens.contains(&key) => {
                        // Already reported at the duplicated start.
                    }
                    _ => {
                        report.push(
                            Diagnostic::new(
                                DiagnosticKind::UnmatchedEnd,
                                format!(
                                    "End tag '{}' found without corresponding start tag.",
                                    marker.tag
                                ),
                            )
                            .in_source(source.name.as_deref())
                            .at(number, marker.column),
                        );
                    }
                },
            }
        }

        let states: Vec<BlockState> = opened
            .iter()
            .filter_map(|key| blocks.remove(key))
            .collect();

        for state in &states {
            if !state.start_found {
                report.push(
                    Diagnostic::new(
                        DiagnosticKind::MissingStart,
                        format!("Start tag '{}' is missing.", state.tag),
                    )
                    .in_source(source.name.as_deref()),
                );
            }
            if !state.end_found {
                report.push(
                    Diagnostic::new(
                        DiagnosticKind::MissingEnd,
                        format!("End tag '{}' is missing.", state.tag),
                    )
                    .in_source(source.name.as_deref())
                    .at_line(state.start_line),
                );
            }
        }

        for state in states {
            if !(state.start_found && state.end_found) {
                continue;
            }
            let body = extract_body(&lines, state.start_line, state.end_line);
            if body.is_empty() {
                report.push(
                    Diagnostic::new(
                        DiagnosticKind::EmptyBlock,
                        format!("SQL block '{}' is empty.", state.tag),
                    )
                    .in_source(source.name.as_deref())
                    .at_line(state.start_line),
                );
            } else {
                candidates.push(ParsedSql {
                    name: state.tag,
                    body,
                });
            }
        }

        tracing::debug!(
            source = source.name.as_deref().unwrap_or("<anonymous>"),
            lines = lines.len(),
            tags = self.seen.len(),
            "scanned source"
        );
    }
}

/// Join the trimmed, non-blank lines strictly between the two markers.
fn extract_body(lines: &[&str], start_line: usize, end_line: usize) -> String {
    let mut body = String::new();
    for text in &lines[start_line..end_line - 1] {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(trimmed);
    }
    body
}
