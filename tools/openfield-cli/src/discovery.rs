//! Locating per-subject XY files in a session directory.

use std::path::{Path, PathBuf};

use openfield_common::error::{OpenFieldError, OpenFieldResult};
use walkdir::WalkDir;

/// File name suffix of the tracker's per-subject exports.
pub const DEFAULT_PATTERN: &str = "_XY.txt";

/// Files directly inside `dir` whose names end with `pattern`, sorted by name.
pub fn discover_inputs(dir: &Path, pattern: &str) -> OpenFieldResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(OpenFieldError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| OpenFieldError::Other(e.into()))?;
        let matches = entry.file_name().to_string_lossy().ends_with(pattern);
        if matches && entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(OpenFieldError::no_input_files(dir, pattern));
    }

    tracing::debug!("Found {} input files in {}", files.len(), dir.display());
    Ok(files)
}

/// Summary CSV path used when none is given: `<dir>/<dir name>_of.csv`.
pub fn default_output_path(dir: &Path) -> PathBuf {
    let name = dir
        .canonicalize()
        .ok()
        .and_then(|abs| abs.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "openfield".to_string());
    dir.join(format!("{name}_of.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_dir(name: &str, files: &[&str]) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("nested_XY.txt")).unwrap();
        for file in files {
            std::fs::write(dir.join(file), "").unwrap();
        }
        dir
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = session_dir(
            "openfield_test_discover",
            &["M-2_XY.txt", "notes.txt", "M-1_XY.txt", "M-3_xy.txt"],
        );

        let files = discover_inputs(&dir, DEFAULT_PATTERN).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["M-1_XY.txt", "M-2_XY.txt"]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_discover_reports_empty_directory() {
        let dir = session_dir("openfield_test_discover_empty", &["notes.txt"]);

        let err = discover_inputs(&dir, DEFAULT_PATTERN).unwrap_err();
        assert!(matches!(err, OpenFieldError::NoInputFiles { .. }));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_discover_missing_directory() {
        let dir = std::env::temp_dir().join("openfield_test_discover_missing");
        let _ = std::fs::remove_dir_all(&dir);
        let err = discover_inputs(&dir, DEFAULT_PATTERN).unwrap_err();
        assert!(matches!(err, OpenFieldError::FileNotFound { .. }));
    }

    #[test]
    fn test_default_output_path_uses_directory_name() {
        let dir = session_dir("openfield_test_session_42", &[]);
        assert_eq!(
            default_output_path(&dir),
            dir.join("openfield_test_session_42_of.csv")
        );
        let _ = std::fs::remove_dir_all(&dir);
    }
}
