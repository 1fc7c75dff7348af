//! Scope module orchestrator.
//!
//! Instance scoping derives a collision-resistant attribute-selector value
//! from a host-supplied unique identifier, so the rules emitted for one
//! container never leak into sibling instances.

mod core;

pub use core::{SCOPE_ATTRIBUTE, SCOPE_PREFIX, ScopeId, escape_attribute_value};
