use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};
use crate::stylesheet::Stylesheet;

/// Counters for stylesheet assembly activity.
#[derive(Debug, Default, Clone)]
pub struct AssemblyMetrics {
    assemblies: u64,
    cache_hits: u64,
    rules_emitted: u64,
    media_blocks: u64,
}

impl AssemblyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_assembly(&mut self, sheet: &Stylesheet) {
        self.assemblies = self.assemblies.saturating_add(1);
        let base_rules = if sheet.base().is_empty() { 0 } else { 1 };
        let media = sheet.media().len() as u64;
        self.rules_emitted = self.rules_emitted.saturating_add(base_rules + media);
        self.media_blocks = self.media_blocks.saturating_add(media);
    }

    pub fn record_cache_hit(&mut self) {
        self.cache_hits = self.cache_hits.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            assemblies: self.assemblies,
            cache_hits: self.cache_hits,
            rules_emitted: self.rules_emitted,
            media_blocks: self.media_blocks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub assemblies: u64,
    pub cache_hits: u64,
    pub rules_emitted: u64,
    pub media_blocks: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "assembly_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("assemblies".to_string(), json!(self.assemblies));
        map.insert("cache_hits".to_string(), json!(self.cache_hits));
        map.insert("rules_emitted".to_string(), json!(self.rules_emitted));
        map.insert("media_blocks".to_string(), json!(self.media_blocks));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;
    use crate::config::{GridConfig, Responsive};
    use crate::scope::ScopeId;

    fn sheet_with_one_media_block() -> Stylesheet {
        let config = GridConfig::new(
            Responsive::base("\"a\"".to_string()).with(Breakpoint::Lg, "\"a a\"".to_string()),
        );
        Stylesheet::assemble(&ScopeId::derive("m1"), &config)
    }

    #[test]
    fn record_assembly_counts_rules_and_media_blocks() {
        let mut metrics = AssemblyMetrics::new();
        metrics.record_assembly(&sheet_with_one_media_block());

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.assemblies, 1);
        assert_eq!(snapshot.rules_emitted, 2);
        assert_eq!(snapshot.media_blocks, 1);
        assert_eq!(snapshot.cache_hits, 0);
    }

    #[test]
    fn snapshot_converts_to_log_event_fields() {
        let mut metrics = AssemblyMetrics::new();
        metrics.record_assembly(&sheet_with_one_media_block());
        metrics.record_cache_hit();

        let event = metrics.snapshot().to_log_event("assembler");
        assert_eq!(event.message, "assembly_metrics");
        assert_eq!(event.fields.get("cache_hits"), Some(&json!(1)));
        assert_eq!(event.fields.get("media_blocks"), Some(&json!(1)));
    }
}
