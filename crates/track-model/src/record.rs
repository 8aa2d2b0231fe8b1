//! Per-subject XY tracking records.
//!
//! The tracker exports one tab-separated text file per subject:
//!
//! ```text
//! Animal ID	M-01
//! ...
//! Slice	X	Y
//! 1	60.5	58.0
//! 2
//! 3	61.0	57.5
//! ```
//!
//! Lines before the `Slice\tX\tY` marker are metadata; only the `Animal ID`
//! line is used. A data row with an empty `X` or `Y` field means the tracker
//! lost the subject in that frame.

use serde::{Deserialize, Serialize};

use crate::point::PixelPoint;

/// Token on the line carrying the subject identifier.
pub const SUBJECT_MARKER: &str = "Animal ID";

/// Column header that precedes the frame rows.
pub const DATA_MARKER: &str = "Slice\tX\tY";

/// One data row as recorded, before gap repair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based frame index as written by the tracker.
    pub frame: u32,

    /// Pixel position, `None` when the observation is missing.
    pub position: Option<PixelPoint>,
}

/// A decoded per-subject record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub subject_id: String,
    pub rows: Vec<RawRow>,
}

/// Errors raised while decoding a record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("no 'Animal ID' line found")]
    MissingSubjectId,

    #[error("line {line}: 'Animal ID' line has no identifier field")]
    EmptySubjectId { line: usize },

    #[error("no 'Slice/X/Y' column header found")]
    MissingDataMarker,

    #[error("line {line}: invalid frame index '{value}'")]
    InvalidFrame { line: usize, value: String },

    #[error("line {line}: invalid {axis} coordinate '{value}'")]
    InvalidCoordinate {
        line: usize,
        axis: char,
        value: String,
    },

    #[error("record contains no data rows")]
    NoRows,
}

impl RawRow {
    pub fn present(frame: u32, x: f64, y: f64) -> Self {
        Self {
            frame,
            position: Some(PixelPoint::new(x, y)),
        }
    }

    pub fn missing(frame: u32) -> Self {
        Self {
            frame,
            position: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.position.is_some()
    }
}

impl RawRecord {
    /// Number of rows without coordinates.
    pub fn missing_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_valid()).count()
    }

    /// Render the record in the tracker's tab-separated layout.
    pub fn to_xy_text(&self) -> String {
        let mut output = format!("{SUBJECT_MARKER}\t{}\n\n{DATA_MARKER}\n", self.subject_id);
        for row in &self.rows {
            match row.position {
                Some(p) => output.push_str(&format!("{}\t{}\t{}\n", row.frame, p.x, p.y)),
                None => output.push_str(&format!("{}\t\t\n", row.frame)),
            }
        }
        output
    }
}

/// Decode one subject's XY text export.
pub fn parse_record(text: &str) -> Result<RawRecord, RecordError> {
    let mut subject_id = None;
    let mut in_data = false;
    let mut rows = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        if line.contains(SUBJECT_MARKER) {
            let id = line
                .trim()
                .split('\t')
                .nth(1)
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .ok_or(RecordError::EmptySubjectId { line: line_no })?;
            subject_id = Some(id.to_string());
            continue;
        }
        if line.contains(DATA_MARKER) {
            in_data = true;
            continue;
        }
        if !in_data || line.trim().is_empty() {
            continue;
        }

        rows.push(parse_row(line, line_no)?);
    }

    let subject_id = subject_id.ok_or(RecordError::MissingSubjectId)?;
    if !in_data {
        return Err(RecordError::MissingDataMarker);
    }
    if rows.is_empty() {
        return Err(RecordError::NoRows);
    }

    Ok(RawRecord { subject_id, rows })
}

fn parse_row(line: &str, line_no: usize) -> Result<RawRow, RecordError> {
    let mut cols = line.split('\t').map(str::trim);

    let frame_field = cols.next().unwrap_or_default();
    let frame = frame_field
        .parse::<u32>()
        .map_err(|_| RecordError::InvalidFrame {
            line: line_no,
            value: frame_field.to_string(),
        })?;

    let x = cols.next().unwrap_or_default();
    let y = cols.next().unwrap_or_default();
    if x.is_empty() || y.is_empty() {
        return Ok(RawRow::missing(frame));
    }

    let coordinate = |axis: char, value: &str| {
        // NaN and infinities parse as f64 but are not positions.
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RecordError::InvalidCoordinate {
                line: line_no,
                axis,
                value: value.to_string(),
            })
    };

    let (x, y) = (coordinate('X', x)?, coordinate('Y', y)?);
    Ok(RawRow::present(frame, x, y))
}
