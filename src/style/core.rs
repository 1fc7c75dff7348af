use std::fmt;

/// One `property: value` pair inside a rule block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// One selector plus its brace-delimited declaration list.
///
/// Declarations whose value is absent or empty are dropped at push time, in
/// caller order; a block that ends up with no declarations renders as
/// nothing at all. That filtering is what suppresses empty breakpoint
/// overrides upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    selector: String,
    declarations: Vec<Declaration>,
}

impl RuleBlock {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration; `None` and `""` are treated identically and
    /// dropped.
    pub fn push(&mut self, property: impl Into<String>, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.declarations.push(Declaration {
                    property: property.into(),
                    value: value.to_string(),
                });
            }
        }
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for RuleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.declarations.is_empty() {
            return Ok(());
        }
        writeln!(f, "{} {{", self.selector)?;
        for decl in &self.declarations {
            writeln!(f, "  {}: {};", decl.property, decl.value)?;
        }
        writeln!(f, "}}")
    }
}

/// A rule block wrapped in a `min-width` media query.
///
/// Renders as nothing when the inner rule is empty, so no empty media query
/// is ever emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    min_width: String,
    rule: RuleBlock,
}

impl MediaBlock {
    pub fn new(min_width: impl Into<String>, rule: RuleBlock) -> Self {
        Self {
            min_width: min_width.into(),
            rule,
        }
    }

    pub fn min_width(&self) -> &str {
        &self.min_width
    }

    pub fn rule(&self) -> &RuleBlock {
        &self.rule
    }

    pub fn is_empty(&self) -> bool {
        self.rule.is_empty()
    }

    /// Exact condition text as it appears in the output.
    pub fn condition(&self) -> String {
        format!("@media (min-width: {})", self.min_width)
    }
}

impl fmt::Display for MediaBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rule.is_empty() {
            return Ok(());
        }
        writeln!(f, "@media (min-width: {}) {{", self.min_width)?;
        write!(f, "{}", self.rule)?;
        writeln!(f, "}}")
    }
}
