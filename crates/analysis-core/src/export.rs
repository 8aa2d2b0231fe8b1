//! Flat row types handed to tabular writers.
//!
//! Field names carry the column headers of the result files, so a CSV
//! writer can serialize these rows directly.

use serde::Serialize;

use crate::sample::Sample;
use crate::zone::ZoneModel;

/// One frame of a subject's inspection dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRow {
    #[serde(rename = "Slice No.")]
    pub slice_no: u32,
    #[serde(rename = "X(pixel)")]
    pub pixel_x: f64,
    #[serde(rename = "Y(pixel)")]
    pub pixel_y: f64,
    #[serde(rename = "X(cm)")]
    pub x: f64,
    #[serde(rename = "Y(cm)")]
    pub y: f64,
    #[serde(rename = "move from previos frame(cm)")]
    pub distance: f64,
    #[serde(rename = "Center left(pixels)")]
    pub min_center_x: f64,
    #[serde(rename = "Center Right(pixels)")]
    pub max_center_x: f64,
    #[serde(rename = "Center bottom(pixels)")]
    pub min_center_y: f64,
    #[serde(rename = "Center top(pixels)")]
    pub max_center_y: f64,
    #[serde(rename = "Resting?")]
    pub is_resting: bool,
    #[serde(rename = "in center?")]
    pub is_center: bool,
    #[serde(rename = "in periphery?")]
    pub is_peripheral: bool,
}

impl FrameRow {
    pub fn new(sample: &Sample, zone: &ZoneModel) -> Self {
        let pixel = sample.pixel();
        let physical = sample.physical();
        Self {
            slice_no: sample.frame(),
            pixel_x: pixel.x,
            pixel_y: pixel.y,
            x: physical.x,
            y: physical.y,
            distance: sample.distance_cm(),
            min_center_x: zone.left,
            max_center_x: zone.right,
            min_center_y: zone.bottom,
            max_center_y: zone.top,
            is_resting: sample.is_resting(),
            is_center: sample.is_center(),
            is_peripheral: sample.is_peripheral(),
        }
    }
}
