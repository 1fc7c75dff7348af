use std::fmt;

/// Attribute carried by the container element and matched by the scope
/// selector.
pub const SCOPE_ATTRIBUTE: &str = "data-area-grid";

/// Prefix applied to every derived scope id.
pub const SCOPE_PREFIX: &str = "ag-";

/// Sanitized per-instance marker value.
///
/// The raw identifier comes from the host environment and is opaque; it is
/// only required to be unique for the lifetime of its instance. Derivation
/// strips every character outside `[A-Za-z0-9_-]`, so the value is safe
/// unquoted as an HTML attribute value and, once escaped, inside a
/// double-quoted attribute selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(String);

impl ScopeId {
    pub fn derive(raw: &str) -> Self {
        let mut value = String::with_capacity(SCOPE_PREFIX.len() + raw.len());
        value.push_str(SCOPE_PREFIX);
        value.extend(
            raw.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '_' | '-')),
        );
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Attribute selector targeting this instance's container.
    pub fn selector(&self) -> String {
        format!(
            "[{}=\"{}\"]",
            SCOPE_ATTRIBUTE,
            escape_attribute_value(&self.0)
        )
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Minimal escaping for attribute-selector usage: `"` becomes `\"`.
///
/// Derived scope ids never contain a quote, so this only guards against a
/// value that bypassed [`ScopeId::derive`]. Accepting arbitrary strings here
/// would require full CSS string escaping instead.
pub fn escape_attribute_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
