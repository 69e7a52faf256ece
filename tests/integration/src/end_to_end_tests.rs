//! End-to-end tests: load .sql files from disk and parse them in one run.

use pretty_assertions::assert_eq;
use sqlvault_parser::{DiagnosticKind, parse_sources};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/sql")
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn fixture_directory_parses_into_a_registry() {
    let sources = sqlvault_fs::load_dir(fixture_dir()).unwrap();
    let registry = parse_sources(&sources).unwrap();

    assert_eq!(registry.len(), 4);
    assert!(registry.contains("GetAllUsers"));
    assert!(registry.contains("getactiveusers"));
    assert!(registry.contains("GetOpenOrders"));
    assert!(registry.contains("CountOrdersByUser"));

    let active = registry.get("GetActiveUsers").unwrap();
    assert!(active.contains("WHERE active = 1"));
    assert_eq!(registry.try_get("demo"), None);
}

#[test]
fn duplicate_across_files_fails_with_the_second_file_named() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "a.sql",
        "-- #start# GetUsers\nSELECT 1\n-- #end# GetUsers\n",
    );
    write(
        dir.path(),
        "b.sql",
        "-- #start# getusers\nSELECT 2\n-- #end# getusers\n",
    );

    let sources = sqlvault_fs::load_dir(dir.path()).unwrap();
    let report = parse_sources(&sources).unwrap_err();

    assert!(report.contains_kind(DiagnosticKind::DuplicateTag));
    // load_dir sorts paths, so b.sql is always the second occurrence.
    assert_eq!(
        report.to_string(),
        "b.sql:(line 1, col 11): error: Duplicate tag 'getusers' found. Each tag must be unique."
    );
}

#[test]
fn problems_from_every_file_land_in_one_report() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "one.sql", "-- #start# Unfinished\nSELECT 1\n");
    write(dir.path(), "two.sql", "-- #end# Stray\n");
    write(
        dir.path(),
        "three.sql",
        "-- #start# Hollow\n\n-- #end# Hollow\n",
    );

    let sources = sqlvault_fs::load_dir(dir.path()).unwrap();
    let report = parse_sources(&sources).unwrap_err();

    assert_eq!(report.len(), 3);
    assert!(report.contains_kind(DiagnosticKind::MissingEnd));
    assert!(report.contains_kind(DiagnosticKind::UnmatchedEnd));
    assert!(report.contains_kind(DiagnosticKind::EmptyBlock));
}

#[test]
fn valid_statements_are_withheld_when_any_file_is_broken() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "good.sql",
        "-- #start# Fine\nSELECT 1\n-- #end# Fine\n",
    );
    write(dir.path(), "bad.sql", "-- #end# Stray\n");

    let sources = sqlvault_fs::load_dir(dir.path()).unwrap();
    assert!(parse_sources(&sources).is_err());
}

#[test]
fn crlf_files_parse_like_lf_files() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "crlf.sql",
        "-- #start# Windows\r\nSELECT 1\r\n-- #end# Windows\r\n",
    );

    let sources = sqlvault_fs::load_dir(dir.path()).unwrap();
    let registry = parse_sources(&sources).unwrap();
    assert_eq!(registry.try_get("Windows"), Some("SELECT 1"));
}
