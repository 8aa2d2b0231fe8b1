//! Coordinate types for tracked positions.
//!
//! `(0, 0)` is a corner of the region of interest; the model makes no
//! assumption about which one, only that both axes grow away from it.

use serde::{Deserialize, Serialize};

/// A position in ROI pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// A position in arena space [cm].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to arena coordinates with per-axis conversion factors [cm/pixel].
    pub fn to_physical(self, cf_x: f64, cf_y: f64) -> PhysicalPoint {
        PhysicalPoint {
            x: self.x * cf_x,
            y: self.y * cf_y,
        }
    }

    /// Euclidean distance to `other` in cm, scaling each axis before combining.
    pub fn scaled_distance(&self, other: &PixelPoint, cf_x: f64, cf_y: f64) -> f64 {
        let dx = (self.x - other.x) * cf_x;
        let dy = (self.y - other.y) * cf_y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_physical_scales_axes_independently() {
        let p = PixelPoint::new(60.0, 30.0).to_physical(0.5, 2.0);
        assert_eq!(p, PhysicalPoint { x: 30.0, y: 60.0 });
    }

    #[test]
    fn test_scaled_distance_uses_axis_factors() {
        let a = PixelPoint::new(0.0, 0.0);
        let b = PixelPoint::new(9.0, 2.0);
        // 9 px * 1/3 = 3 cm, 2 px * 2 = 4 cm
        assert!((a.scaled_distance(&b, 1.0 / 3.0, 2.0) - 5.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn scaled_distance_is_symmetric(
            ax in -500.0f64..500.0,
            ay in -500.0f64..500.0,
            bx in -500.0f64..500.0,
            by in -500.0f64..500.0,
            cf_x in 0.01f64..10.0,
            cf_y in 0.01f64..10.0,
        ) {
            let a = PixelPoint::new(ax, ay);
            let b = PixelPoint::new(bx, by);
            let ab = a.scaled_distance(&b, cf_x, cf_y);
            let ba = b.scaled_distance(&a, cf_x, cf_y);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-9);
        }
    }
}
