//! OpenField CLI: command-line interface for open field trajectory analysis.
//!
//! Usage:
//!   openfield analyze <DIR>     Analyze every XY file in a session directory
//!   openfield validate <DIR>    Decode and repair records without writing results
//!   openfield params            Show the analysis parameters in effect

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use openfield_common::config::{config_file_path, AppConfig};

mod commands;
mod discovery;
mod output;

use commands::ParamArgs;

#[derive(Parser)]
#[command(
    name = "openfield",
    about = "Open field test analysis from per-subject XY tracking exports",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the user config file when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a session directory and write the summary CSV
    Analyze {
        /// Directory holding the per-subject XY files
        dir: PathBuf,

        /// Summary CSV path (default: <DIR>/<dir name>_of.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File name suffix selecting XY files
        #[arg(long, default_value = discovery::DEFAULT_PATTERN)]
        pattern: String,

        /// Write per-frame tables and the parameter report
        #[arg(long)]
        debug: bool,

        /// Directory for debug output (default: <DIR>)
        #[arg(long)]
        debug_dir: Option<PathBuf>,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Decode and repair every record, reporting frame counts
    Validate {
        /// Directory holding the per-subject XY files
        dir: PathBuf,

        /// File name suffix selecting XY files
        #[arg(long, default_value = discovery::DEFAULT_PATTERN)]
        pattern: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Show the analysis parameters and center zone geometry
    Params {
        /// Store the resulting parameters in the user config file
        #[arg(long)]
        save: bool,

        #[command(flatten)]
        params: ParamArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut app_config, load_failure) = match &cli.config {
        Some(path) => (AppConfig::load_from(path)?, None),
        None => AppConfig::load(),
    };

    let mut logging = app_config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    openfield_common::logging::init_logging(&logging);

    if let Some(e) = load_failure {
        tracing::warn!(
            "Failed to load config at {}: {}; using defaults",
            config_file_path().display(),
            e
        );
    }

    match cli.command {
        Commands::Analyze {
            dir,
            output,
            pattern,
            debug,
            debug_dir,
            params,
        } => {
            params.apply(&mut app_config.analysis);
            let debug_dir = debug.then(|| debug_dir.unwrap_or_else(|| dir.clone()));
            commands::analyze::run(dir, output, pattern, debug_dir, app_config.analysis).await
        }
        Commands::Validate {
            dir,
            pattern,
            params,
        } => {
            params.apply(&mut app_config.analysis);
            commands::validate::run(dir, pattern, app_config.analysis)
        }
        Commands::Params { save, params } => {
            params.apply(&mut app_config.analysis);
            commands::params::run(&app_config, save)
        }
    }
}
