//! Parse orchestration: many sources in, one registry or one report out.

use crate::diagnostics::ParseReport;
use crate::registry::SqlRegistry;
use crate::source::SqlSource;
use crate::tracker::BlockTracker;

/// Parse every source, in order, into a single registry.
///
/// One shared tracker scans all sources, so a tag reused across two sources
/// is a duplicate just like one reused within a single source. Diagnostics
/// accumulate in the order they are raised, source by source; if any exist
/// after the last source, the run fails with the whole report and nothing
/// is committed.
///
/// A pure function of its inputs: no I/O, no retained state.
pub fn parse_sources(sources: &[SqlSource]) -> std::result::Result<SqlRegistry, ParseReport> {
    let mut tracker = BlockTracker::default();
    let mut report = ParseReport::default();
    let mut candidates = Vec::new();

    for source in sources {
        tracker.scan_source(source, &mut report, &mut candidates);
    }

    if !report.is_empty() {
        tracing::debug!(diagnostics = report.len(), "parse run failed");
        return Err(report);
    }

    let mut registry = SqlRegistry::default();
    for statement in candidates {
        registry.try_insert(statement);
    }
    tracing::debug!(statements = registry.len(), "parse run committed");
    Ok(registry)
}

/// Parse a single anonymous source, e.g. an inline string.
pub fn parse_str(content: &str) -> std::result::Result<SqlRegistry, ParseReport> {
    parse_sources(&[SqlSource::anonymous(content)])
}
