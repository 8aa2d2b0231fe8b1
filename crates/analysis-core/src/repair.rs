//! Gap repair for frames the tracker lost.
//!
//! Only rows that carried coordinates in the input act as anchors, so every
//! frame of a run of missing rows is resolved against the same pair:
//!
//! - between two anchors: linear interpolation by frame number
//! - before the first anchor: copy of the first anchor (forward fill)
//! - after the last anchor: copy of the last anchor (backward fill)

use openfield_track_model::point::PixelPoint;
use openfield_track_model::record::RawRow;

use crate::trajectory::TrajectoryError;

/// Resolve every row to a pixel position. Rows with coordinates pass through
/// unchanged.
pub fn repair_gaps(rows: &[RawRow]) -> Result<Vec<PixelPoint>, TrajectoryError> {
    let anchors: Vec<(u32, PixelPoint)> = rows
        .iter()
        .filter_map(|row| row.position.map(|p| (row.frame, p)))
        .collect();

    rows.iter()
        .map(|row| {
            if row.position.is_some() {
                return row.position;
            }

            let split = anchors.partition_point(|(frame, _)| *frame < row.frame);
            let pre = split.checked_sub(1).map(|i| anchors[i]);
            let post = anchors.get(split).copied();

            match (pre, post) {
                (Some(pre), Some(post)) => Some(interpolate(pre, post, row.frame)),
                (Some((_, p)), None) | (None, Some((_, p))) => Some(p),
                (None, None) => None,
            }
        })
        .collect::<Option<Vec<_>>>()
        .ok_or(TrajectoryError::NoValidCoordinates { rows: rows.len() })
}

/// Linear interpolation between two anchors, proportional to the target
/// frame's offset from `pre`.
fn interpolate(pre: (u32, PixelPoint), post: (u32, PixelPoint), frame: u32) -> PixelPoint {
    let (pre_frame, a) = pre;
    let (post_frame, b) = post;
    let span = f64::from(post_frame) - f64::from(pre_frame);
    let offset = f64::from(frame) - f64::from(pre_frame);

    PixelPoint::new(
        (b.x - a.x) / span * offset + a.x,
        (b.y - a.y) / span * offset + a.y,
    )
}
