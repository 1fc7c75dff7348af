//! Error module orchestrator.
//!
//! Downstream code imports error types from here while the definitions live
//! in the private `types` module. Logging keeps its own error enum in
//! `crate::logging`.

mod types;

pub use types::{Result, ScopeError};
