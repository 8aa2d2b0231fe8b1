//! Show the analysis parameters in effect.

use openfield_analysis_core::{Analyzer, ParameterReport};
use openfield_common::config::{config_file_path, AppConfig};

pub fn run(app_config: &AppConfig, save: bool) -> anyhow::Result<()> {
    let analyzer = Analyzer::new(app_config.analysis)?;
    println!(
        "{}",
        ParameterReport::new(analyzer.config(), analyzer.zone_model())
    );

    if save {
        app_config.save()?;
        println!("\nSaved to: {}", config_file_path().display());
    }

    Ok(())
}
