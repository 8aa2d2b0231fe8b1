//! Repaired per-subject trajectories and windowed metrics.
//!
//! # Building
//!
//! 1. **Check** that frame numbers run 1, 2, 3, ... in record order.
//! 2. **Repair** missing coordinates (see [`crate::repair`]).
//! 3. **Measure** each frame against its predecessor and classify it.
//!
//! # Windows
//!
//! Every windowed query takes `(start_secs, end_secs)` and keeps the frames
//! in `[start_secs * frame_rate + 1, end_secs * frame_rate]`. At 2 fps the
//! window `(0, 300)` covers frames 1..=600 and `(300, 600)` covers
//! 601..=1200, so adjacent windows tile the experiment without overlap.

use openfield_common::config::AnalysisConfig;
use openfield_track_model::record::{RawRecord, RecordError};

use crate::export::FrameRow;
use crate::repair::repair_gaps;
use crate::sample::Sample;
use crate::zone::{Zone, ZoneModel};

/// Reasons a subject's record cannot become a trajectory.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrajectoryError {
    #[error("invalid record: {0}")]
    Record(#[from] RecordError),

    #[error("record has no frames")]
    EmptyRecord,

    #[error("frame numbers must run 1, 2, 3, ...: expected frame {expected}, found {found}")]
    NonContiguousFrames { expected: u32, found: u32 },

    #[error("none of the {rows} frames has coordinates, gaps cannot be repaired")]
    NoValidCoordinates { rows: usize },
}

/// Closed frame range selected by a `(start_secs, end_secs)` window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameWindow {
    pub start_frame: f64,
    pub end_frame: f64,
}

impl FrameWindow {
    pub fn from_secs(start_secs: f64, end_secs: f64, frame_rate: f64) -> Self {
        Self {
            start_frame: start_secs * frame_rate + 1.0,
            end_frame: end_secs * frame_rate,
        }
    }

    pub fn contains(&self, frame: u32) -> bool {
        let frame = f64::from(frame);
        frame >= self.start_frame && frame <= self.end_frame
    }
}

/// One subject's repaired, classified sample sequence.
#[derive(Debug, Clone)]
pub struct Trajectory {
    subject_id: String,
    samples: Vec<Sample>,
    zone: ZoneModel,
    frame_rate: f64,
    duration_secs: f64,
    repaired_frames: usize,
}

impl Trajectory {
    /// Build a trajectory from a decoded record.
    pub fn build(
        record: &RawRecord,
        config: &AnalysisConfig,
        zone: &ZoneModel,
    ) -> Result<Self, TrajectoryError> {
        if record.rows.is_empty() {
            return Err(TrajectoryError::EmptyRecord);
        }
        for (expected, row) in (1u32..).zip(&record.rows) {
            if row.frame != expected {
                return Err(TrajectoryError::NonContiguousFrames {
                    expected,
                    found: row.frame,
                });
            }
        }

        let positions = repair_gaps(&record.rows)?;
        let repaired_frames = record.missing_count();

        let mut samples = Vec::with_capacity(positions.len());
        let mut previous = None;
        for (row, &pixel) in record.rows.iter().zip(&positions) {
            samples.push(Sample::new(row.frame, pixel, previous, config, zone));
            previous = Some(pixel);
        }

        tracing::debug!(
            "Built trajectory for {}: {} frames, {} repaired",
            record.subject_id,
            samples.len(),
            repaired_frames
        );

        Ok(Self {
            subject_id: record.subject_id.clone(),
            samples,
            zone: *zone,
            frame_rate: config.frame_rate,
            duration_secs: config.duration_secs,
            repaired_frames,
        })
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Sample for a 1-based frame number.
    pub fn frame(&self, number: u32) -> Option<&Sample> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.samples.get(index)
    }

    pub fn zone_model(&self) -> &ZoneModel {
        &self.zone
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Configured experiment duration [sec].
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Number of frames whose coordinates were filled in by gap repair.
    pub fn repaired_frames(&self) -> usize {
        self.repaired_frames
    }

    /// Samples inside the window.
    pub fn window(&self, start_secs: f64, end_secs: f64) -> impl Iterator<Item = &Sample> + '_ {
        let window = FrameWindow::from_secs(start_secs, end_secs, self.frame_rate);
        self.samples
            .iter()
            .filter(move |sample| window.contains(sample.frame()))
    }

    /// Distance travelled [cm].
    pub fn total_move(&self, start_secs: f64, end_secs: f64) -> f64 {
        self.sum_distance(start_secs, end_secs, |_| true)
    }

    /// Distance travelled while in the center zone [cm].
    pub fn total_move_in_center(&self, start_secs: f64, end_secs: f64) -> f64 {
        self.sum_distance(start_secs, end_secs, |s| s.zone() == Zone::Center)
    }

    /// Distance travelled while in the peripheral zone [cm].
    pub fn total_move_in_peripheral(&self, start_secs: f64, end_secs: f64) -> f64 {
        self.sum_distance(start_secs, end_secs, |s| s.zone() == Zone::Peripheral)
    }

    /// Time covered by recorded frames [sec].
    pub fn performance_time(&self, start_secs: f64, end_secs: f64) -> f64 {
        self.time_where(start_secs, end_secs, |_| true)
    }

    pub fn performance_time_in_center(&self, start_secs: f64, end_secs: f64) -> f64 {
        self.time_where(start_secs, end_secs, |s| s.zone() == Zone::Center)
    }

    pub fn performance_time_in_peripheral(&self, start_secs: f64, end_secs: f64) -> f64 {
        self.time_where(start_secs, end_secs, |s| s.zone() == Zone::Peripheral)
    }

    /// Time spent resting [sec].
    pub fn resting_time(&self, start_secs: f64, end_secs: f64) -> f64 {
        self.time_where(start_secs, end_secs, Sample::is_resting)
    }

    pub fn resting_time_in_center(&self, start_secs: f64, end_secs: f64) -> f64 {
        self.time_where(start_secs, end_secs, |s| {
            s.is_resting() && s.zone() == Zone::Center
        })
    }

    pub fn resting_time_in_peripheral(&self, start_secs: f64, end_secs: f64) -> f64 {
        self.time_where(start_secs, end_secs, |s| {
            s.is_resting() && s.zone() == Zone::Peripheral
        })
    }

    /// Elapsed time of the first center frame within the experiment [sec].
    ///
    /// Returns the configured duration when the subject never entered the
    /// center.
    pub fn latency_to_center_entry(&self) -> f64 {
        self.window(0.0, self.duration_secs)
            .find(|s| s.is_center())
            .map_or(self.duration_secs, Sample::elapsed_secs)
    }

    /// Number of entries into the center zone.
    ///
    /// Starting in the center counts as an entry; afterwards every
    /// periphery-to-center transition counts once.
    pub fn number_of_center_entry(&self) -> usize {
        let starts_in_center = self.samples.first().is_some_and(Sample::is_center);
        let transitions = self
            .samples
            .windows(2)
            .filter(|pair| pair[0].is_peripheral() && pair[1].is_center())
            .count();
        usize::from(starts_in_center) + transitions
    }

    /// Per-frame rows for inspection dumps.
    pub fn frame_rows(&self) -> Vec<FrameRow> {
        self.samples
            .iter()
            .map(|sample| FrameRow::new(sample, &self.zone))
            .collect()
    }

    // Folded from +0.0: an empty f64 `sum()` yields -0.0.
    fn sum_distance(
        &self,
        start_secs: f64,
        end_secs: f64,
        keep: impl Fn(&Sample) -> bool,
    ) -> f64 {
        self.window(start_secs, end_secs)
            .filter(|s| keep(*s))
            .map(Sample::distance_cm)
            .fold(0.0, |total, d| total + d)
    }

    fn time_where(&self, start_secs: f64, end_secs: f64, keep: impl Fn(&Sample) -> bool) -> f64 {
        let frames = self.window(start_secs, end_secs).filter(|s| keep(*s)).count();
        frames as f64 / self.frame_rate
    }
}
