//! Style module orchestrator.
//!
//! Typed CSS fragments: declarations, rule blocks, and media blocks. The
//! assembler composes these instead of concatenating raw text so structure
//! stays inspectable independent of exact whitespace.

mod core;

pub use core::{Declaration, MediaBlock, RuleBlock};
