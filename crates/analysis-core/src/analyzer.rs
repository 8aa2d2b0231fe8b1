//! Entry point tying configuration, trajectories, and summaries together.

use openfield_common::config::AnalysisConfig;
use openfield_common::error::ConfigError;
use openfield_track_model::record::{parse_record, RawRecord};

use crate::batch::BatchReport;
use crate::summary::SubjectSummary;
use crate::trajectory::{Trajectory, TrajectoryError};
use crate::zone::ZoneModel;

/// A trajectory together with its summary row.
#[derive(Debug, Clone)]
pub struct SubjectAnalysis {
    pub trajectory: Trajectory,
    pub summary: SubjectSummary,
}

/// Analyzes subject records under one validated configuration.
///
/// Cheap to clone; holds no per-subject state.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    zone: ZoneModel,
}

impl Analyzer {
    /// Validate the configuration and derive the zone model.
    pub fn new(config: AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            zone: ZoneModel::from_config(&config),
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn zone_model(&self) -> &ZoneModel {
        &self.zone
    }

    /// Repair and classify a decoded record.
    pub fn trajectory(&self, record: &RawRecord) -> Result<Trajectory, TrajectoryError> {
        Trajectory::build(record, &self.config, &self.zone)
    }

    /// Summary row for a decoded record.
    pub fn analyze(&self, record: &RawRecord) -> Result<SubjectSummary, TrajectoryError> {
        let trajectory = self.trajectory(record)?;
        Ok(SubjectSummary::from_trajectory(&trajectory))
    }

    /// Decode an XY text export and analyze it.
    pub fn analyze_text(&self, text: &str) -> Result<SubjectAnalysis, TrajectoryError> {
        let record = parse_record(text)?;
        let trajectory = self.trajectory(&record)?;
        let summary = SubjectSummary::from_trajectory(&trajectory);
        Ok(SubjectAnalysis {
            trajectory,
            summary,
        })
    }

    /// Analyze `(source, text)` inputs one after another.
    ///
    /// Failures are recorded against their source and do not stop the batch.
    pub fn analyze_batch<'a, I>(&self, inputs: I) -> BatchReport
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut report = BatchReport::new();
        for (source, text) in inputs {
            report.record(source, self.analyze_text(text).map(|a| a.summary));
        }
        report.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_config() {
        let config = AnalysisConfig {
            center_area_pct: 0.0,
            ..Default::default()
        };
        assert!(Analyzer::new(config).is_err());
    }

    #[test]
    fn test_analyze_text_reports_decode_errors() {
        let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
        let err = analyzer.analyze_text("Slice\tX\tY\n1\t1\t1\n").unwrap_err();
        assert!(matches!(err, TrajectoryError::Record(_)));
    }

    #[test]
    fn test_analyze_text_keeps_trajectory() {
        let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
        let text = "Animal ID\tR1\nSlice\tX\tY\n1\t60\t60\n2\t\t\n3\t66\t60\n";
        let analysis = analyzer.analyze_text(text).unwrap();
        assert_eq!(analysis.trajectory.samples().len(), 3);
        assert_eq!(analysis.trajectory.repaired_frames(), 1);
        assert_eq!(analysis.summary.subject_id, "R1");
        // 6 px over two frames = 2 cm on the default arena
        assert!(
            (analysis.summary.distance_traveled_total - 2.0).abs() < 1e-9
        );
    }
}
