//! OpenField Common Utilities
//!
//! Shared infrastructure for all OpenField crates:
//! - Error types and result aliases
//! - Analysis parameters and application configuration loading
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
