use std::collections::{HashMap, HashSet};

use blake3::Hash;

use crate::error::{Result, ScopeError};
use crate::logging::{LogLevel, Logger, scope_field};
use crate::scope::ScopeId;

const LOG_TARGET: &str = "gridscope::registry";

/// Last known stylesheet state for one live instance.
#[derive(Debug, Clone)]
pub struct InstanceState {
    pub css: String,
    hash: Option<Hash>,
    pub is_dirty: bool,
}

impl InstanceState {
    fn new() -> Self {
        Self {
            css: String::new(),
            hash: None,
            is_dirty: false,
        }
    }

    fn update_css(&mut self, css: String) {
        let new_hash = blake3::hash(css.as_bytes());
        if self.hash.map(|h| h != new_hash).unwrap_or(true) {
            self.css = css;
            self.hash = Some(new_hash);
            self.is_dirty = true;
        }
    }
}

/// Registry of live instance scopes.
///
/// Two concurrently live instances must never share a scope id; `register`
/// enforces that. The per-instance CSS text is content-hashed so repeated
/// pushes of identical text stay clean.
#[derive(Default)]
pub struct ScopeRegistry {
    entries: HashMap<ScopeId, InstanceState>,
    dirty: HashSet<ScopeId>,
    logger: Option<Logger>,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(logger: Logger) -> Self {
        Self {
            logger: Some(logger),
            ..Self::default()
        }
    }

    /// Derive and claim the scope id for a new instance.
    pub fn register(&mut self, raw_id: &str) -> Result<ScopeId> {
        let scope = ScopeId::derive(raw_id);
        if self.entries.contains_key(&scope) {
            return Err(ScopeError::Collision(scope.as_str().to_string()));
        }
        self.entries.insert(scope.clone(), InstanceState::new());
        self.log(LogLevel::Debug, "scope_registered", &scope);
        Ok(scope)
    }

    /// Store the instance's current CSS; returns whether it changed.
    pub fn apply_css(&mut self, scope: &ScopeId, css: String) -> Result<bool> {
        let entry = self
            .entries
            .get_mut(scope)
            .ok_or_else(|| ScopeError::NotFound(scope.as_str().to_string()))?;
        entry.update_css(css);
        let dirty = entry.is_dirty;
        if dirty {
            self.dirty.insert(scope.clone());
            self.log(LogLevel::Debug, "stylesheet_updated", scope);
        }
        Ok(dirty)
    }

    /// Drain instances whose CSS changed since the last drain, sorted by
    /// scope id for deterministic flushing.
    pub fn take_dirty(&mut self) -> Vec<(ScopeId, String)> {
        let ids: Vec<_> = self.dirty.drain().collect();
        let mut flushed: Vec<_> = ids
            .into_iter()
            .filter_map(|id| {
                self.entries.get_mut(&id).map(|state| {
                    state.is_dirty = false;
                    (id.clone(), state.css.clone())
                })
            })
            .collect();
        flushed.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        flushed
    }

    /// Release a scope at instance teardown, freeing the id for reuse.
    pub fn release(&mut self, scope: &ScopeId) -> Result<()> {
        self.entries
            .remove(scope)
            .ok_or_else(|| ScopeError::NotFound(scope.as_str().to_string()))?;
        self.dirty.remove(scope);
        self.log(LogLevel::Debug, "scope_released", scope);
        Ok(())
    }

    pub fn css_of(&self, scope: &ScopeId) -> Option<&str> {
        self.entries.get(scope).map(|state| state.css.as_str())
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn log(&self, level: LogLevel, message: &str, scope: &ScopeId) {
        if let Some(logger) = &self.logger {
            // Logging failures never fail a registry operation.
            let _ = logger.log_with_fields(level, LOG_TARGET, message, scope_field(scope.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use std::sync::Arc;

    #[test]
    fn register_claims_a_unique_scope() {
        let mut registry = ScopeRegistry::new();
        let scope = registry.register(":r1:").unwrap();
        assert_eq!(scope.as_str(), "ag-r1");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn colliding_raw_ids_are_rejected() {
        let mut registry = ScopeRegistry::new();
        registry.register(":r1:").unwrap();

        // Distinct raw ids can sanitize to the same scope id.
        let err = registry.register("r#1").unwrap_err();
        assert!(matches!(err, ScopeError::Collision(ref s) if s == "ag-r1"));
    }

    #[test]
    fn released_scopes_can_be_reused() {
        let mut registry = ScopeRegistry::new();
        let scope = registry.register("r1").unwrap();
        registry.release(&scope).unwrap();
        assert!(registry.register("r1").is_ok());
    }

    #[test]
    fn apply_css_detects_changes_once() {
        let mut registry = ScopeRegistry::new();
        let scope = registry.register("r1").unwrap();

        assert!(registry.apply_css(&scope, "a { gap: 1rem; }".to_string()).unwrap());
        let dirty = registry.take_dirty();
        assert_eq!(dirty.len(), 1);
        assert_eq!(dirty[0].1, "a { gap: 1rem; }");

        assert!(!registry
            .apply_css(&scope, "a { gap: 1rem; }".to_string())
            .unwrap());
        assert!(registry.take_dirty().is_empty());

        assert!(registry.apply_css(&scope, "a { gap: 2rem; }".to_string()).unwrap());
        assert!(registry.has_dirty());
        assert_eq!(registry.css_of(&scope), Some("a { gap: 2rem; }"));
    }

    #[test]
    fn unknown_scopes_error() {
        let mut registry = ScopeRegistry::new();
        let stray = ScopeId::derive("ghost");
        assert!(matches!(
            registry.apply_css(&stray, String::new()),
            Err(ScopeError::NotFound(_))
        ));
        assert!(matches!(registry.release(&stray), Err(ScopeError::NotFound(_))));
    }

    #[test]
    fn registry_logs_lifecycle_events() {
        let sink = Arc::new(MemorySink::new());
        let mut registry = ScopeRegistry::with_logger(Logger::with_shared_sink(sink.clone()));

        let scope = registry.register("r1").unwrap();
        registry.apply_css(&scope, "x".to_string()).unwrap();
        registry.release(&scope).unwrap();

        let messages: Vec<String> = sink.events().into_iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec!["scope_registered", "stylesheet_updated", "scope_released"]
        );
    }
}
