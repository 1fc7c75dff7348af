use serde::{Deserialize, Serialize};

/// Named minimum-width breakpoints.
///
/// Declaration order is significant: it is the emission order of media
/// blocks and, conventionally, ascending width. Threshold values are not
/// checked for monotonicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint above `base`, in emission order.
    pub const OVERRIDES: [Breakpoint; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

/// Source of the default media-query thresholds.
///
/// `Rem` substitutes literal lengths; `CustomProperty` defers to
/// `var(--breakpoint-*)` references resolved by the surrounding styling
/// environment. Assembly behaves identically under either, only the literal
/// condition text differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdStrategy {
    #[default]
    Rem,
    CustomProperty,
}

/// Caller-supplied partial threshold overrides, merged over defaults
/// key-by-key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<String>,
    #[serde(rename = "2xl", skip_serializing_if = "Option::is_none")]
    pub xxl: Option<String>,
}

/// Fully resolved thresholds for the five override breakpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    sm: String,
    md: String,
    lg: String,
    xl: String,
    xxl: String,
}

impl Thresholds {
    /// Built-in defaults for `strategy`.
    pub fn defaults(strategy: ThresholdStrategy) -> Self {
        match strategy {
            ThresholdStrategy::Rem => Self {
                sm: "40rem".to_string(),
                md: "48rem".to_string(),
                lg: "64rem".to_string(),
                xl: "80rem".to_string(),
                xxl: "96rem".to_string(),
            },
            ThresholdStrategy::CustomProperty => Self {
                sm: "var(--breakpoint-sm)".to_string(),
                md: "var(--breakpoint-md)".to_string(),
                lg: "var(--breakpoint-lg)".to_string(),
                xl: "var(--breakpoint-xl)".to_string(),
                xxl: "var(--breakpoint-2xl)".to_string(),
            },
        }
    }

    /// Defaults for `strategy`, overwritten by any key present in
    /// `overrides`. Each key resolves independently.
    pub fn resolve(strategy: ThresholdStrategy, overrides: &ThresholdOverrides) -> Self {
        let defaults = Self::defaults(strategy);
        Self {
            sm: overrides.sm.clone().unwrap_or(defaults.sm),
            md: overrides.md.clone().unwrap_or(defaults.md),
            lg: overrides.lg.clone().unwrap_or(defaults.lg),
            xl: overrides.xl.clone().unwrap_or(defaults.xl),
            xxl: overrides.xxl.clone().unwrap_or(defaults.xxl),
        }
    }

    /// Override breakpoints paired with their resolved thresholds, in
    /// emission order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &str)> {
        [
            (Breakpoint::Sm, self.sm.as_str()),
            (Breakpoint::Md, self.md.as_str()),
            (Breakpoint::Lg, self.lg.as_str()),
            (Breakpoint::Xl, self.xl.as_str()),
            (Breakpoint::Xxl, self.xxl.as_str()),
        ]
        .into_iter()
    }

    /// Resolved threshold for a non-base breakpoint; `Base` has none.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&str> {
        match breakpoint {
            Breakpoint::Base => None,
            Breakpoint::Sm => Some(&self.sm),
            Breakpoint::Md => Some(&self.md),
            Breakpoint::Lg => Some(&self.lg),
            Breakpoint::Xl => Some(&self.xl),
            Breakpoint::Xxl => Some(&self.xxl),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::defaults(ThresholdStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rem_defaults_match_builtin_scale() {
        let thresholds = Thresholds::defaults(ThresholdStrategy::Rem);
        assert_eq!(thresholds.get(Breakpoint::Sm), Some("40rem"));
        assert_eq!(thresholds.get(Breakpoint::Md), Some("48rem"));
        assert_eq!(thresholds.get(Breakpoint::Lg), Some("64rem"));
        assert_eq!(thresholds.get(Breakpoint::Xl), Some("80rem"));
        assert_eq!(thresholds.get(Breakpoint::Xxl), Some("96rem"));
        assert_eq!(thresholds.get(Breakpoint::Base), None);
    }

    #[test]
    fn custom_property_defaults_reference_named_variables() {
        let thresholds = Thresholds::defaults(ThresholdStrategy::CustomProperty);
        assert_eq!(thresholds.get(Breakpoint::Sm), Some("var(--breakpoint-sm)"));
        assert_eq!(
            thresholds.get(Breakpoint::Xxl),
            Some("var(--breakpoint-2xl)")
        );
    }

    #[test]
    fn resolve_merges_overrides_per_key() {
        let overrides = ThresholdOverrides {
            md: Some("500px".to_string()),
            xxl: Some("110rem".to_string()),
            ..ThresholdOverrides::default()
        };

        let resolved = Thresholds::resolve(ThresholdStrategy::Rem, &overrides);
        assert_eq!(resolved.get(Breakpoint::Sm), Some("40rem"));
        assert_eq!(resolved.get(Breakpoint::Md), Some("500px"));
        assert_eq!(resolved.get(Breakpoint::Lg), Some("64rem"));
        assert_eq!(resolved.get(Breakpoint::Xl), Some("80rem"));
        assert_eq!(resolved.get(Breakpoint::Xxl), Some("110rem"));
    }

    #[test]
    fn iter_yields_fixed_emission_order() {
        let order: Vec<Breakpoint> = Thresholds::default().iter().map(|(bp, _)| bp).collect();
        assert_eq!(order, Breakpoint::OVERRIDES.to_vec());
    }

    #[test]
    fn breakpoint_names_match_their_serialized_form() {
        assert_eq!(Breakpoint::Base.as_str(), "base");
        assert_eq!(Breakpoint::Sm.as_str(), "sm");
        assert_eq!(Breakpoint::Xxl.as_str(), "2xl");
    }

    #[test]
    fn breakpoint_serde_uses_2xl_spelling() {
        let json = serde_json::to_string(&Breakpoint::Xxl).unwrap();
        assert_eq!(json, "\"2xl\"");
        let parsed: Breakpoint = serde_json::from_str("\"2xl\"").unwrap();
        assert_eq!(parsed, Breakpoint::Xxl);
    }

    #[test]
    fn threshold_overrides_deserialize_from_partial_json() {
        let overrides: ThresholdOverrides =
            serde_json::from_str(r#"{"md": "500px", "2xl": "110rem"}"#).unwrap();
        assert_eq!(overrides.md.as_deref(), Some("500px"));
        assert_eq!(overrides.xxl.as_deref(), Some("110rem"));
        assert!(overrides.sm.is_none());
    }
}
