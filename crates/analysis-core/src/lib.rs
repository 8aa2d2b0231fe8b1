//! OpenField Analysis Core
//!
//! Turns decoded tracking records into behavioral metrics:
//! - **Gap repair:** Fill frames the tracker lost from surrounding valid frames
//! - **Zone classification:** Split the ROI into a center square and the periphery
//! - **Windowed metrics:** Distance, permanence, resting time and center entries
//!
//! This crate is pure computation with no I/O. Records come in as data and
//! summaries go out as data.

pub mod analyzer;
pub mod batch;
pub mod export;
pub mod repair;
pub mod report;
pub mod sample;
pub mod summary;
pub mod trajectory;
pub mod zone;

pub use analyzer::{Analyzer, SubjectAnalysis};
pub use batch::{BatchReport, SubjectFailure};
pub use export::FrameRow;
pub use report::ParameterReport;
pub use sample::Sample;
pub use summary::SubjectSummary;
pub use trajectory::{Trajectory, TrajectoryError};
pub use zone::{Zone, ZoneModel};
