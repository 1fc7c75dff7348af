//! Breakpoint module orchestrator.
//!
//! Names the fixed set of minimum-width breakpoints and resolves each
//! non-base breakpoint to its effective media-query threshold.

mod core;

pub use core::{Breakpoint, ThresholdOverrides, ThresholdStrategy, Thresholds};
