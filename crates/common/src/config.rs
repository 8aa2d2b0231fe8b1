//! Analysis parameters and application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, OpenFieldError, OpenFieldResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Experiment and arena parameters.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parameters fixed for one analysis run.
///
/// Every subject of a batch is analyzed with the same parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Open field arena width [cm].
    pub arena_width_cm: f64,

    /// Open field arena height [cm].
    pub arena_height_cm: f64,

    /// Tracked region of interest width [pixels].
    pub roi_width_px: f64,

    /// Tracked region of interest height [pixels].
    pub roi_height_px: f64,

    /// Share of the ROI area assigned to the center zone [%].
    pub center_area_pct: f64,

    /// Experiment duration [sec].
    pub duration_secs: f64,

    /// Tracking frame rate [fps].
    pub frame_rate: f64,

    /// Speed above which the subject counts as moving [cm/sec].
    pub motion_criteria_cm_per_s: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "openfield=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            arena_width_cm: 40.0,
            arena_height_cm: 40.0,
            roi_width_px: 120.0,
            roi_height_px: 120.0,
            center_area_pct: 40.0,
            duration_secs: 1200.0,
            frame_rate: 2.0,
            motion_criteria_cm_per_s: 4.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AnalysisConfig {
    /// Check every parameter before any subject is analyzed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena width", self.arena_width_cm),
            ("arena height", self.arena_height_cm),
            ("ROI width", self.roi_width_px),
            ("ROI height", self.roi_height_px),
            ("duration", self.duration_secs),
            ("frame rate", self.frame_rate),
        ];
        for (name, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let motion = self.motion_criteria_cm_per_s;
        if !motion.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "motion criteria",
                value: motion,
            });
        }
        if motion < 0.0 {
            return Err(ConfigError::Negative {
                name: "motion criteria",
                value: motion,
            });
        }

        let center = self.center_area_pct;
        if !center.is_finite() || center <= 0.0 || center > 100.0 {
            return Err(ConfigError::CenterAreaOutOfRange { value: center });
        }

        let side = self.center_side_px();
        let short_side = self.roi_width_px.min(self.roi_height_px);
        if side > short_side {
            let roi_area = self.roi_width_px * self.roi_height_px;
            return Err(ConfigError::CenterExceedsRoi {
                center_pct: center,
                side,
                roi_width: self.roi_width_px,
                roi_height: self.roi_height_px,
                max_pct: short_side * short_side / roi_area * 100.0,
            });
        }

        Ok(())
    }

    /// X conversion factor [cm/pixel].
    pub fn cf_x(&self) -> f64 {
        self.arena_width_cm / self.roi_width_px
    }

    /// Y conversion factor [cm/pixel].
    pub fn cf_y(&self) -> f64 {
        self.arena_height_cm / self.roi_height_px
    }

    /// Center zone area [pixels^2].
    pub fn center_area_px(&self) -> f64 {
        self.roi_width_px * self.roi_height_px * self.center_area_pct / 100.0
    }

    /// Side length of the square center zone [pixels].
    pub fn center_side_px(&self) -> f64 {
        self.center_area_px().sqrt()
    }

    /// Largest per-frame displacement still classified as resting [cm].
    pub fn resting_threshold_cm(&self) -> f64 {
        self.motion_criteria_cm_per_s / self.frame_rate
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    ///
    /// Runs before logging is set up, so a broken file is handed back
    /// alongside the defaults for the caller to report.
    pub fn load() -> (Self, Option<OpenFieldError>) {
        Self::load_or_default(config_file_path())
    }

    /// Load config from `path` when it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<OpenFieldError>) {
        let path = path.as_ref();
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load config from an explicit path. Missing or invalid files are errors.
    pub fn load_from(path: impl AsRef<Path>) -> OpenFieldResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("openfield").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.cf_x() - 40.0 / 120.0).abs() < 1e-12);
        assert!((config.resting_threshold_cm() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_frame_rate() {
        let config = AnalysisConfig {
            frame_rate: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "frame rate",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_center_area_bounds() {
        let mut config = AnalysisConfig {
            center_area_pct: 100.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.center_area_pct = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CenterAreaOutOfRange { .. })
        ));

        config.center_area_pct = 100.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CenterAreaOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_center_wider_than_narrow_roi() {
        let config = AnalysisConfig {
            roi_width_px: 200.0,
            roi_height_px: 50.0,
            center_area_pct: 100.0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::CenterExceedsRoi { side, max_pct, .. }) => {
                assert_eq!(side, 100.0);
                assert_eq!(max_pct, 25.0);
            }
            other => panic!("expected CenterExceedsRoi, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_nan_duration() {
        let config = AnalysisConfig {
            duration_secs: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                name: "duration",
                ..
            })
        ));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let raw = r#"{ "analysis": { "frame_rate": 30.0 } }"#;
        let parsed: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.analysis.frame_rate, 30.0);
        assert_eq!(parsed.analysis.duration_secs, 1200.0);
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn test_broken_file_falls_back_with_reason() {
        let dir = std::env::temp_dir().join("openfield_test_broken_config");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let (config, failure) = AppConfig::load_or_default(&path);
        assert_eq!(config.analysis, AnalysisConfig::default());
        assert!(matches!(failure, Some(OpenFieldError::Json(_))));

        let (_, failure) = AppConfig::load_or_default(dir.join("absent.json"));
        assert!(failure.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let path = std::env::temp_dir().join("openfield_missing_config.json");
        let _ = std::fs::remove_file(&path);
        assert!(AppConfig::load_from(&path).is_err());
    }
}
