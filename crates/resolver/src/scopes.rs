use std::sync::Arc;

use dashmap::DashMap;
use indexing::ScopeId;
use rustc_hash::FxBuildHasher;
use tracing::debug;

use crate::cache::ResultCache;

/// Per-scope cache registry.
///
/// Each host-managed scope (project) gets its own [`ResultCache`]; closing a
/// scope drops its entries wholesale without disturbing other scopes.
#[derive(Debug, Default)]
pub struct ScopeRegistry {
    caches: DashMap<ScopeId, Arc<ResultCache>, FxBuildHasher>,
}

impl ScopeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cache for `scope`, creating it on first use.
    #[must_use]
    pub fn cache_for(&self, scope: &ScopeId) -> Arc<ResultCache> {
        self.caches
            .entry(scope.clone())
            .or_default()
            .value()
            .clone()
    }

    /// Drops the cache of a closed scope.
    pub fn drop_scope(&self, scope: &ScopeId) {
        if self.caches.remove(scope).is_some() {
            debug!(%scope, "dropped result cache for closed scope");
        }
    }

    /// Physically clears every scope's cache (explicit rebuild).
    pub fn clear_all(&self) {
        for cache in &self.caches {
            cache.value().clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScopeRegistry;
    use indexing::ScopeId;

    #[test]
    fn same_scope_returns_same_cache() {
        let registry = ScopeRegistry::new();
        let scope = ScopeId::new("p1");
        let a = registry.cache_for(&scope);
        let b = registry.cache_for(&scope);
        assert!(std::sync::Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn scopes_are_isolated() {
        let registry = ScopeRegistry::new();
        let a = registry.cache_for(&ScopeId::new("p1"));
        let b = registry.cache_for(&ScopeId::new("p2"));
        assert!(!std::sync::Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn dropping_a_scope_forgets_its_cache() {
        let registry = ScopeRegistry::new();
        let scope = ScopeId::new("p1");
        let before = registry.cache_for(&scope);
        registry.drop_scope(&scope);
        let after = registry.cache_for(&scope);
        assert!(!std::sync::Arc::ptr_eq(&before, &after));
    }
}
