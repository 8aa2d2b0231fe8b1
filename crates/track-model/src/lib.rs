//! OpenField Track Model
//!
//! Defines the data contracts consumed by the trajectory analysis:
//! - **Records:** one subject's decoded XY tracking log (identifier + frame rows)
//! - **Points:** pixel-space and physical-space coordinates
//!
//! Pixel coordinates are reported relative to the tracked region of
//! interest; physical coordinates are centimeters inside the arena.

pub mod point;
pub mod record;

pub use point::*;
pub use record::*;
