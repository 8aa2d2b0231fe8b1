//! Center/periphery zone model.
//!
//! The center zone is a square of `center_area_pct` percent of the ROI area,
//! centered in the ROI. Edges are rounded to two decimals and the zone is
//! inclusive on all four of them.

use openfield_common::config::AnalysisConfig;
use serde::{Deserialize, Serialize};

/// Zone a position falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Center,
    Peripheral,
}

/// The center rectangle in ROI pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneModel {
    /// Center zone area [pixels^2], unrounded.
    pub area: f64,
    /// Center zone side length [pixels], unrounded.
    pub side: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl ZoneModel {
    pub fn new(roi_width_px: f64, roi_height_px: f64, center_area_pct: f64) -> Self {
        let area = roi_width_px * roi_height_px * center_area_pct / 100.0;
        let side = area.sqrt();
        let left = roi_width_px / 2.0 - side / 2.0;
        let bottom = roi_height_px / 2.0 - side / 2.0;

        Self {
            area,
            side,
            left: round2(left),
            right: round2(left + side),
            bottom: round2(bottom),
            top: round2(bottom + side),
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.roi_width_px,
            config.roi_height_px,
            config.center_area_pct,
        )
    }

    /// Classify a pixel position.
    pub fn classify(&self, px: f64, py: f64) -> Zone {
        if self.contains(px, py) {
            Zone::Center
        } else {
            Zone::Peripheral
        }
    }

    /// Whether a pixel position lies in the center rectangle, edges included.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.left && px <= self.right && py >= self.bottom && py <= self.top
    }

    /// Corners as `(left,bottom), (right,bottom), (right,top), (left,top)`.
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.left, self.bottom),
            (self.right, self.bottom),
            (self.right, self.top),
            (self.left, self.top),
        ]
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
