//! Registry module orchestrator.
//!
//! Tracks the scope ids of concurrently live instances and each instance's
//! last pushed CSS, so hosts can enforce scope uniqueness and flush only
//! the stylesheets that changed.

mod core;

pub use core::{InstanceState, ScopeRegistry};
