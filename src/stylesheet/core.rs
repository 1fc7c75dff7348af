use std::fmt;

use crate::breakpoint::{Breakpoint, Thresholds};
use crate::config::GridConfig;
use crate::scope::ScopeId;
use crate::style::{MediaBlock, RuleBlock};

/// Assembled CSS for one layout instance.
///
/// Holds the typed fragments so structure stays inspectable; `Display`
/// concatenates them into the final text blob, base rule first, media
/// blocks in breakpoint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    base: RuleBlock,
    media: Vec<MediaBlock>,
}

impl Stylesheet {
    /// Assemble the stylesheet for one instance.
    ///
    /// Exactly one base rule is produced and it is never wrapped in a media
    /// query. Each override breakpoint contributes a media block only when
    /// at least one of areas/columns/rows carries a non-empty value there;
    /// gap, align-items, and justify-items stay base-only. Values pass
    /// through unvalidated.
    pub fn assemble(scope: &ScopeId, config: &GridConfig) -> Self {
        let selector = scope.selector();
        let thresholds = Thresholds::resolve(config.strategy, &config.breakpoints);

        let mut base = RuleBlock::new(selector.clone());
        base.push("grid-template-areas", config.area(Breakpoint::Base))
            .push("grid-template-columns", config.column(Breakpoint::Base))
            .push("grid-template-rows", config.row(Breakpoint::Base))
            .push("gap", Some(config.gap_or_default()))
            .push("align-items", config.align_items.as_deref())
            .push("justify-items", config.justify_items.as_deref());

        let mut media = Vec::new();
        for (breakpoint, min_width) in thresholds.iter() {
            if !config.has_override(breakpoint) {
                continue;
            }

            let mut rule = RuleBlock::new(selector.clone());
            rule.push("grid-template-areas", config.area(breakpoint))
                .push("grid-template-columns", config.column(breakpoint))
                .push("grid-template-rows", config.row(breakpoint));
            media.push(MediaBlock::new(min_width, rule));
        }

        Self { base, media }
    }

    pub fn base(&self) -> &RuleBlock {
        &self.base
    }

    pub fn media(&self) -> &[MediaBlock] {
        &self.media
    }

    /// Final CSS text.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        for block in &self.media {
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}
