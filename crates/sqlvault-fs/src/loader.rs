//! Recursive discovery and loading of `.sql` files.

use std::fs;
use std::path::{Path, PathBuf};

use sqlvault_parser::SqlSource;

use crate::error::{Error, Result};

/// Load every `*.sql` file under `dir`, recursively, as a parse source.
///
/// The extension match is case-insensitive. Files are visited in sorted
/// path order so a parse run over the result, and any diagnostics it
/// raises, are stable across platforms and runs. Each source is named
/// after its file name, which is how diagnostics refer to it.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<SqlSource>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    collect_sql_files(dir, &mut paths)?;
    paths.sort();

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        sources.push(load_file(&path)?);
    }
    tracing::debug!(dir = %dir.display(), files = sources.len(), "loaded SQL sources");
    Ok(sources)
}

/// Load a single file as a parse source named after its file name.
pub fn load_file(path: impl AsRef<Path>) -> Result<SqlSource> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    };
    Ok(SqlSource::new(name, content))
}

fn collect_sql_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_sql_files(&path, out)?;
        } else if has_sql_extension(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_sql_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn loads_sql_files_recursively_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.sql", "-- b");
        write(dir.path(), "a.sql", "-- a");
        write(dir.path(), "nested/c.sql", "-- c");

        let sources = load_dir(dir.path()).unwrap();
        let names: Vec<&str> = sources
            .iter()
            .filter_map(|s| s.name.as_deref())
            .collect();
        assert_eq!(names, vec!["a.sql", "b.sql", "c.sql"]);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "upper.SQL", "-- upper");
        write(dir.path(), "ignored.txt", "not sql");

        let sources = load_dir(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name.as_deref(), Some("upper.SQL"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = load_dir(&missing).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound { .. }));
        assert!(err.to_string().ends_with(": error: No such directory exists."));
    }

    #[test]
    fn load_file_names_source_after_file_name() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "users.sql", "SELECT 1");
        let source = load_file(dir.path().join("users.sql")).unwrap();
        assert_eq!(source.name.as_deref(), Some("users.sql"));
        assert_eq!(source.content, "SELECT 1");
    }
}
