//! Presentation-boundary helpers.
//!
//! The crate never renders a visual tree; these are the attribute and
//! inline-style strings a host needs to wire a container element and its
//! named slots to an assembled stylesheet.

use crate::scope::{SCOPE_ATTRIBUTE, ScopeId};

/// Inline style for the container element carrying the scope attribute.
pub const CONTAINER_STYLE: &str = "display: grid; width: 100%; min-width: 0;";

/// Inline style for a slot element placed into a named area.
pub fn slot_style(area: &str) -> String {
    format!("grid-area: {}; min-width: 0;", area)
}

/// Ready-to-splice `attribute="value"` pair for the container element.
pub fn container_attribute(scope: &ScopeId) -> String {
    format!("{}=\"{}\"", SCOPE_ATTRIBUTE, scope.as_str())
}

/// Wrap assembled CSS in a style element, for hosts splicing markup
/// directly.
pub fn style_element(css: &str) -> String {
    format!("<style>{}</style>", css)
}
