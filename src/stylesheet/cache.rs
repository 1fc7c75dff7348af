use blake3::Hash;

use crate::config::GridConfig;
use crate::metrics::{AssemblyMetrics, MetricSnapshot};
use crate::scope::ScopeId;

use super::core::Stylesheet;

/// Memoizing wrapper around [`Stylesheet::assemble`].
///
/// Assembly is a pure function of the scope and configuration, so the cache
/// key is a hash of the full input tuple and a hit returns the previous
/// stylesheet untouched. Output is byte-identical with or without the
/// cache; this is an optimization, not a contract.
#[derive(Debug, Default)]
pub struct CachedAssembler {
    last: Option<(Hash, Stylesheet)>,
    metrics: AssemblyMetrics,
}

impl CachedAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assemble(&mut self, scope: &ScopeId, config: &GridConfig) -> &Stylesheet {
        let fingerprint = fingerprint(scope, config);
        let hit = self
            .last
            .as_ref()
            .is_some_and(|(hash, _)| *hash == fingerprint);

        if hit {
            self.metrics.record_cache_hit();
        } else {
            let sheet = Stylesheet::assemble(scope, config);
            self.metrics.record_assembly(&sheet);
            self.last = Some((fingerprint, sheet));
        }

        let (_, sheet) = self.last.as_ref().expect("cache populated on miss");
        sheet
    }

    pub fn metrics(&self) -> MetricSnapshot {
        self.metrics.snapshot()
    }
}

fn fingerprint(scope: &ScopeId, config: &GridConfig) -> Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(scope.as_str().as_bytes());
    hasher.update(&[0]);
    let config_bytes =
        serde_json::to_vec(config).expect("grid configuration serializes to JSON");
    hasher.update(&config_bytes);
    hasher.finalize()
}
