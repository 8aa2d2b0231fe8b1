//! Human-readable record of the parameters an analysis ran with.

use std::fmt;

use openfield_common::config::AnalysisConfig;

use crate::zone::{round2, ZoneModel};

/// Text report of analysis parameters and center zone geometry.
#[derive(Debug, Clone, Copy)]
pub struct ParameterReport<'a> {
    config: &'a AnalysisConfig,
    zone: &'a ZoneModel,
}

impl<'a> ParameterReport<'a> {
    pub fn new(config: &'a AnalysisConfig, zone: &'a ZoneModel) -> Self {
        Self { config, zone }
    }
}

impl fmt::Display for ParameterReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;
        let z = self.zone;

        writeln!(f, "OpenField analyzer v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(f)?;
        writeln!(f, "Arena width (cm): {}", c.arena_width_cm)?;
        writeln!(f, "Arena height (cm): {}", c.arena_height_cm)?;
        writeln!(f, "ROI width (pixels): {}", c.roi_width_px)?;
        writeln!(f, "ROI height (pixels): {}", c.roi_height_px)?;
        writeln!(f, "Center region (%): {}", c.center_area_pct)?;
        writeln!(f, "Duration (sec): {}", c.duration_secs)?;
        writeln!(f, "Frame rate (fps): {}", c.frame_rate)?;
        writeln!(
            f,
            "Motion criteria (cm/sec): {}",
            c.motion_criteria_cm_per_s
        )?;
        writeln!(f)?;
        writeln!(f, "Center region (pixels):")?;
        for (x, y) in z.corners() {
            writeln!(f, "  ({x}, {y})")?;
        }
        writeln!(f, "  side length: {}", round2(z.side))?;
        write!(f, "  area: {}", round2(z.area))
    }
}
