//! Scoped, responsive CSS grid rule generation.
//!
//! `gridscope` turns a declarative description of named grid areas, column
//! and row templates, and per-breakpoint overrides into a CSS text blob
//! scoped to one layout container through a unique attribute selector. The
//! host environment supplies a stable per-instance identifier, inserts the
//! returned CSS into a live style context, and tags the container element
//! with the matching scope attribute; this crate only synthesizes the text.
//!
//! ```
//! use gridscope::{Breakpoint, GridConfig, Responsive, ScopeId, Stylesheet};
//!
//! let scope = ScopeId::derive("instance-1");
//! let config = GridConfig::new(
//!     Responsive::base("\"nav main\"".to_string())
//!         .with(Breakpoint::Lg, "\"nav main aside\"".to_string()),
//! )
//! .with_columns(
//!     Responsive::base("12rem 1fr".to_string())
//!         .with(Breakpoint::Lg, "12rem 1fr 16rem".to_string()),
//! );
//!
//! let css = Stylesheet::assemble(&scope, &config).css();
//! assert!(css.contains("@media (min-width: 64rem)"));
//! ```

pub mod breakpoint;
pub mod config;
pub mod error;
pub mod logging;
pub mod markup;
pub mod metrics;
pub mod registry;
pub mod scope;
pub mod style;
pub mod stylesheet;

pub use breakpoint::{Breakpoint, ThresholdOverrides, ThresholdStrategy, Thresholds};
pub use config::{DEFAULT_GAP, GridConfig, Responsive};
pub use error::{Result, ScopeError};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use markup::{CONTAINER_STYLE, container_attribute, slot_style, style_element};
pub use metrics::{AssemblyMetrics, MetricSnapshot};
pub use registry::{InstanceState, ScopeRegistry};
pub use scope::{SCOPE_ATTRIBUTE, SCOPE_PREFIX, ScopeId, escape_attribute_value};
pub use style::{Declaration, MediaBlock, RuleBlock};
pub use stylesheet::{CachedAssembler, Stylesheet};
