//! Analyze a session directory of per-subject XY files.

use std::path::{Path, PathBuf};

use openfield_analysis_core::{Analyzer, BatchReport, ParameterReport, SubjectAnalysis};
use openfield_common::config::AnalysisConfig;
use openfield_common::error::{OpenFieldError, OpenFieldResult};
use tokio::task::JoinSet;

use crate::discovery::{default_output_path, discover_inputs};
use crate::output;

pub async fn run(
    dir: PathBuf,
    output: Option<PathBuf>,
    pattern: String,
    debug_dir: Option<PathBuf>,
    config: AnalysisConfig,
) -> anyhow::Result<()> {
    let analyzer = Analyzer::new(config)?;
    let files = discover_inputs(&dir, &pattern)?;
    let output_path = output.unwrap_or_else(|| default_output_path(&dir));

    println!("Analyzing {} file(s) in: {}", files.len(), dir.display());
    tracing::info!(
        "Zone bounds: x [{}, {}], y [{}, {}]",
        analyzer.zone_model().left,
        analyzer.zone_model().right,
        analyzer.zone_model().bottom,
        analyzer.zone_model().top
    );

    let mut tasks = JoinSet::new();
    for (index, path) in files.iter().cloned().enumerate() {
        let analyzer = analyzer.clone();
        tasks.spawn_blocking(move || (index, analyze_file(&analyzer, &path)));
    }

    let mut outcomes: Vec<Option<OpenFieldResult<SubjectAnalysis>>> =
        files.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, outcome) = joined?;
        outcomes[index] = Some(outcome);
    }

    let mut tables = match &debug_dir {
        Some(debug_dir) => Some(output::SubjectTables::prepare(debug_dir)?),
        None => None,
    };

    // Record in discovery order so duplicate ids sort deterministically.
    let mut report = BatchReport::new();
    for (path, outcome) in files.iter().zip(outcomes) {
        let outcome = outcome
            .ok_or_else(|| OpenFieldError::output(format!("no result for {}", path.display())))?;
        if let (Ok(analysis), Some(tables)) = (&outcome, tables.as_mut()) {
            let rows = analysis.trajectory.frame_rows();
            tables.write(&analysis.summary.subject_id, path, &rows)?;
        }
        let outcome = outcome.map(|a| a.summary).map_err(failure_reason);
        report.record(path.display().to_string(), outcome);
    }
    let report = report.finish();

    output::write_summaries(&output_path, report.summaries())?;
    tracing::info!(
        "Wrote {} summary row(s) to {}",
        report.summaries().len(),
        output_path.display()
    );

    if let (Some(debug_dir), Some(tables)) = (&debug_dir, &tables) {
        let params = ParameterReport::new(analyzer.config(), analyzer.zone_model());
        let info = output::write_parameter_report(debug_dir, &params)?;
        println!("  Debug tables: {}", tables.dir().display());
        println!("  Parameters: {}", info.display());
    }

    println!("  Analyzed: {}", report.summaries().len());
    if !report.failures().is_empty() {
        println!("\nSkipped {} file(s):", report.failures().len());
        for failure in report.failures() {
            println!("  - {}: {}", failure.source, failure.reason);
        }
    }
    println!("\nSummary written to: {}", output_path.display());

    Ok(())
}

/// Failure text without the path, which the report already carries.
fn failure_reason(error: OpenFieldError) -> String {
    match error {
        OpenFieldError::MalformedRecord { message, .. } => message,
        other => other.to_string(),
    }
}

fn analyze_file(analyzer: &Analyzer, path: &Path) -> OpenFieldResult<SubjectAnalysis> {
    let text = std::fs::read_to_string(path)?;
    analyzer
        .analyze_text(&text)
        .map_err(|e| OpenFieldError::malformed_record(path, e.to_string()))
}
