use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, ThresholdOverrides, ThresholdStrategy};

/// Gap applied to the base rule when the caller supplies none.
pub const DEFAULT_GAP: &str = "1rem";

/// One optional value per breakpoint.
///
/// Only `base` is conventionally meaningful on its own; a missing key means
/// no override at that breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Responsive<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
    #[serde(rename = "2xl", skip_serializing_if = "Option::is_none")]
    pub xxl: Option<T>,
}

impl<T> Default for Responsive<T> {
    fn default() -> Self {
        Self {
            base: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
        }
    }
}

impl<T> Responsive<T> {
    /// Value at `base` only.
    pub fn base(value: T) -> Self {
        Self {
            base: Some(value),
            ..Self::default()
        }
    }

    /// Builder-style override at one breakpoint.
    pub fn with(mut self, breakpoint: Breakpoint, value: T) -> Self {
        *self.slot_mut(breakpoint) = Some(value);
        self
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::Base => self.base.as_ref(),
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
            Breakpoint::Xxl => self.xxl.as_ref(),
        }
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<T> {
        match breakpoint {
            Breakpoint::Base => &mut self.base,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::Xxl => &mut self.xxl,
        }
    }
}

/// Aggregate input for one layout instance.
///
/// `areas`, `columns`, and `rows` carry raw `grid-template-*` values per
/// breakpoint; `gap`, `align_items`, and `justify_items` apply only at the
/// base rule. Values pass through uninterpreted, malformed CSS included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub areas: Responsive<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Responsive<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Responsive<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_items: Option<String>,
    pub breakpoints: ThresholdOverrides,
    pub strategy: ThresholdStrategy,
}

impl GridConfig {
    pub fn new(areas: Responsive<String>) -> Self {
        Self {
            areas,
            ..Self::default()
        }
    }

    pub fn with_columns(mut self, columns: Responsive<String>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_rows(mut self, rows: Responsive<String>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn with_align_items(mut self, align_items: impl Into<String>) -> Self {
        self.align_items = Some(align_items.into());
        self
    }

    pub fn with_justify_items(mut self, justify_items: impl Into<String>) -> Self {
        self.justify_items = Some(justify_items.into());
        self
    }

    pub fn with_breakpoints(mut self, overrides: ThresholdOverrides) -> Self {
        self.breakpoints = overrides;
        self
    }

    pub fn with_strategy(mut self, strategy: ThresholdStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Effective base gap.
    pub fn gap_or_default(&self) -> &str {
        self.gap.as_deref().unwrap_or(DEFAULT_GAP)
    }

    pub fn area(&self, breakpoint: Breakpoint) -> Option<&str> {
        self.areas.get(breakpoint).map(String::as_str)
    }

    pub fn column(&self, breakpoint: Breakpoint) -> Option<&str> {
        self.columns
            .as_ref()
            .and_then(|c| c.get(breakpoint))
            .map(String::as_str)
    }

    pub fn row(&self, breakpoint: Breakpoint) -> Option<&str> {
        self.rows
            .as_ref()
            .and_then(|r| r.get(breakpoint))
            .map(String::as_str)
    }

    /// True when at least one of areas/columns/rows carries a non-empty
    /// value at `breakpoint`.
    pub fn has_override(&self, breakpoint: Breakpoint) -> bool {
        [
            self.area(breakpoint),
            self.column(breakpoint),
            self.row(breakpoint),
        ]
        .into_iter()
        .any(|value| value.is_some_and(|v| !v.is_empty()))
    }
}
