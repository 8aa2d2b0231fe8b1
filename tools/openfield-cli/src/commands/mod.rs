pub mod analyze;
pub mod params;
pub mod validate;

use clap::Args;
use openfield_common::config::AnalysisConfig;

/// Command-line overrides for analysis parameters.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamArgs {
    /// Arena width [cm]
    #[arg(long)]
    pub arena_width: Option<f64>,

    /// Arena height [cm]
    #[arg(long)]
    pub arena_height: Option<f64>,

    /// ROI width [pixels]
    #[arg(long)]
    pub roi_width: Option<f64>,

    /// ROI height [pixels]
    #[arg(long)]
    pub roi_height: Option<f64>,

    /// Center zone share of the ROI area [%]
    #[arg(long)]
    pub center_area: Option<f64>,

    /// Experiment duration [sec]
    #[arg(long)]
    pub duration: Option<f64>,

    /// Tracking frame rate [fps]
    #[arg(long)]
    pub frame_rate: Option<f64>,

    /// Speed above which the subject counts as moving [cm/sec]
    #[arg(long)]
    pub motion_criteria: Option<f64>,
}

impl ParamArgs {
    /// Overwrite the parameters given on the command line.
    pub fn apply(&self, config: &mut AnalysisConfig) {
        let overrides = [
            (self.arena_width, &mut config.arena_width_cm),
            (self.arena_height, &mut config.arena_height_cm),
            (self.roi_width, &mut config.roi_width_px),
            (self.roi_height, &mut config.roi_height_px),
            (self.center_area, &mut config.center_area_pct),
            (self.duration, &mut config.duration_secs),
            (self.frame_rate, &mut config.frame_rate),
            (self.motion_criteria, &mut config.motion_criteria_cm_per_s),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_touches_given_fields() {
        let args = ParamArgs {
            roi_width: Some(320.0),
            frame_rate: Some(30.0),
            ..Default::default()
        };
        let mut config = AnalysisConfig::default();
        args.apply(&mut config);

        assert_eq!(config.roi_width_px, 320.0);
        assert_eq!(config.frame_rate, 30.0);
        assert_eq!(config.roi_height_px, 120.0);
        assert_eq!(config.duration_secs, 1200.0);
    }
}
