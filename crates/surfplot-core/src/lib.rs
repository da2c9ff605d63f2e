//! Surfplot Core
//!
//! Shared plumbing for the surfplot crates: logging bootstrap, profiling
//! hooks, math re-exports and the viewer configuration.

pub mod config;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::PlotterConfig;
