//! Result files: summary CSV, per-subject frame tables, parameter report.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use openfield_analysis_core::{FrameRow, ParameterReport, SubjectSummary};
use openfield_common::error::{OpenFieldError, OpenFieldResult};
use serde::Serialize;

/// Subdirectory of the debug directory holding per-subject tables.
pub const SUBJECTS_DIR: &str = "subjects";

/// Parameter report file name inside the debug directory.
pub const REPORT_FILE: &str = "analyze.info";

/// Write one summary row per subject.
pub fn write_summaries(path: &Path, summaries: &[SubjectSummary]) -> OpenFieldResult<()> {
    write_rows(path, summaries)
}

/// Write the per-frame table of one subject.
pub fn write_frame_rows(path: &Path, rows: &[FrameRow]) -> OpenFieldResult<()> {
    write_rows(path, rows)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> OpenFieldResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Per-subject frame tables under `<debug_dir>/subjects`.
///
/// Table names follow the subject id. A repeated id gets the source file
/// stem appended so no table is overwritten.
#[derive(Debug)]
pub struct SubjectTables {
    dir: PathBuf,
    taken: HashSet<PathBuf>,
}

impl SubjectTables {
    /// Create the directory and remove tables left by earlier runs.
    pub fn prepare(debug_dir: &Path) -> OpenFieldResult<Self> {
        let dir = debug_dir.join(SUBJECTS_DIR);
        std::fs::create_dir_all(&dir)?;

        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
                std::fs::remove_file(&path)?;
            }
        }
        Ok(Self {
            dir,
            taken: HashSet::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one subject's table and return its path.
    pub fn write(
        &mut self,
        subject_id: &str,
        source: &Path,
        rows: &[FrameRow],
    ) -> OpenFieldResult<PathBuf> {
        let path = self.table_path(subject_id, source);
        write_frame_rows(&path, rows)?;
        Ok(path)
    }

    fn table_path(&mut self, subject_id: &str, source: &Path) -> PathBuf {
        let base = file_safe(subject_id);
        let mut path = self.dir.join(format!("{base}.csv"));

        if self.taken.contains(&path) {
            let stem = source
                .file_stem()
                .map(|s| file_safe(&s.to_string_lossy()))
                .unwrap_or_default();
            path = self.dir.join(format!("{base}_{stem}.csv"));
            let mut n = 2;
            while self.taken.contains(&path) {
                path = self.dir.join(format!("{base}_{stem}_{n}.csv"));
                n += 1;
            }
            tracing::warn!(
                "Subject {} already has a table, writing {}",
                subject_id,
                path.display()
            );
        }

        self.taken.insert(path.clone());
        path
    }
}

/// Replace path separators so an id can serve as a file name.
fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

/// Write `analyze.info` with a timestamp line followed by the report.
pub fn write_parameter_report(
    debug_dir: &Path,
    report: &ParameterReport<'_>,
) -> OpenFieldResult<PathBuf> {
    let path = debug_dir.join(REPORT_FILE);
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    std::fs::write(&path, format!("Analyzed at {stamp}\n{report}\n"))
        .map_err(|e| OpenFieldError::output(format!("{}: {e}", path.display())))?;
    Ok(path)
}
