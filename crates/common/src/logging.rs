//! Logging and tracing initialization.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Crate targets that log at the configured level.
const OPENFIELD_TARGETS: &[&str] = &[
    "openfield",
    "openfield_cli",
    "openfield_common",
    "openfield_track_model",
    "openfield_analysis_core",
];

/// Filter directives for a configured level.
///
/// A bare level such as `"debug"` applies to the OpenField crates only;
/// everything else stays at `warn`. Anything containing `=` or `,` is taken
/// as a full directive string.
pub fn filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let level = if level.is_empty() { "info" } else { level };
    let mut directives = vec!["warn".to_string()];
    directives.extend(OPENFIELD_TARGETS.iter().map(|t| format!("{t}={level}")));
    directives.join(",")
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `config.level` when set. Calling this
/// more than once keeps the first subscriber.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.level)));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.with_target(false).finish())
    };
    if installed.is_ok() {
        tracing::debug!("Logging initialized at {}", config.level);
    }
}
