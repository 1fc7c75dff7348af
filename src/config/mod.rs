//! Config module orchestrator.
//!
//! The declarative input surface: per-breakpoint template values and the
//! aggregate configuration for one layout instance.

mod core;

pub use core::{DEFAULT_GAP, GridConfig, Responsive};
