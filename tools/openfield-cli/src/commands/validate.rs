//! Decode and repair every record in a session directory.

use std::path::PathBuf;

use openfield_analysis_core::Analyzer;
use openfield_common::config::AnalysisConfig;
use openfield_track_model::record::parse_record;

use crate::discovery::discover_inputs;

pub fn run(dir: PathBuf, pattern: String, config: AnalysisConfig) -> anyhow::Result<()> {
    println!("Validating records in: {}", dir.display());

    let analyzer = Analyzer::new(config)?;
    let files = discover_inputs(&dir, &pattern)?;

    let mut issues = Vec::new();
    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let checked = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| parse_record(&text).map_err(|e| e.to_string()))
            .and_then(|record| analyzer.trajectory(&record).map_err(|e| e.to_string()));

        match checked {
            Ok(trajectory) => println!(
                "  {name}: {} ({} frames, {} repaired)",
                trajectory.subject_id(),
                trajectory.samples().len(),
                trajectory.repaired_frames()
            ),
            Err(reason) => {
                println!("  {name}: INVALID");
                issues.push(format!("{name}: {reason}"));
            }
        }
    }

    if issues.is_empty() {
        println!("\nAll {} record(s) are valid.", files.len());
    } else {
        println!("\nValidation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!(
            "\n{} of {} record(s) cannot be analyzed.",
            issues.len(),
            files.len()
        );
    }

    Ok(())
}
