//! Per-frame observations.

use openfield_common::config::AnalysisConfig;
use openfield_track_model::point::{PhysicalPoint, PixelPoint};

use crate::zone::{Zone, ZoneModel};

/// One frame of a repaired trajectory.
///
/// Built once from a repaired pixel position and the position of the
/// preceding frame; read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    frame: u32,
    elapsed_secs: f64,
    pixel: PixelPoint,
    physical: PhysicalPoint,
    distance_cm: f64,
    resting: bool,
    zone: Zone,
}

impl Sample {
    /// Build a sample. `previous` is the pixel position of frame `frame - 1`,
    /// `None` for the first frame.
    pub fn new(
        frame: u32,
        pixel: PixelPoint,
        previous: Option<PixelPoint>,
        config: &AnalysisConfig,
        zone: &ZoneModel,
    ) -> Self {
        let (cf_x, cf_y) = (config.cf_x(), config.cf_y());

        let (distance_cm, resting) = match previous {
            Some(prev) => {
                let distance = pixel.scaled_distance(&prev, cf_x, cf_y);
                (distance, distance <= config.resting_threshold_cm())
            }
            // The first frame has nothing to move from and is never resting.
            None => (0.0, false),
        };

        Self {
            frame,
            elapsed_secs: f64::from(frame) / config.frame_rate,
            pixel,
            physical: pixel.to_physical(cf_x, cf_y),
            distance_cm,
            resting,
            zone: zone.classify(pixel.x, pixel.y),
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Seconds since the start of the experiment (`frame / frame_rate`).
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn pixel(&self) -> PixelPoint {
        self.pixel
    }

    pub fn physical(&self) -> PhysicalPoint {
        self.physical
    }

    /// Distance moved since the previous frame [cm].
    pub fn distance_cm(&self) -> f64 {
        self.distance_cm
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn is_center(&self) -> bool {
        self.zone == Zone::Center
    }

    pub fn is_peripheral(&self) -> bool {
        !self.is_center()
    }
}
