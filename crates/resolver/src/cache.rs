use std::sync::Arc;

use associations::{Association, IconType};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::config::Config;

#[derive(Clone, Debug)]
struct CacheEntry {
    generation: u64,
    result: Option<Arc<Association>>,
}

/// Read-through result cache for one scope.
///
/// Entries are unbounded and never individually evicted. Instead, each entry
/// is stamped with the configuration generation it was resolved under; an
/// entry whose stamp no longer matches the current generation is dead and is
/// recomputed on the next lookup. That turns "clear the cache" into a single
/// atomic counter bump on the [`Config`] side, with no sweep and no window
/// in which a concurrent reader can serve a result for an already-replaced
/// rule as fresh.
///
/// Misses are cached alongside hits: re-probing the index for a path no rule
/// matches would otherwise run on every repaint.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: DashMap<(IconType, String), CacheEntry, FxBuildHasher>,
}

impl ResultCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for `(icon_type, path)` if it is still
    /// current, otherwise runs `resolve` and caches its outcome.
    ///
    /// The generation is sampled before resolving; if a mutation lands in
    /// between, the freshly stored entry is already stale and dies on the
    /// next lookup, so a racing reader can never pin an outdated rule.
    pub fn get_or_resolve(
        &self,
        config: &Config,
        icon_type: IconType,
        path: &str,
        resolve: impl FnOnce() -> Option<Arc<Association>>,
    ) -> Option<Arc<Association>> {
        let generation = config.generation();
        if let Some(entry) = self.entries.get(&(icon_type, path.to_owned()))
            && entry.generation == generation
        {
            return entry.result.clone();
        }

        let result = resolve();
        self.entries.insert(
            (icon_type, path.to_owned()),
            CacheEntry {
                generation,
                result: result.clone(),
            },
        );
        result
    }

    /// Like [`get_or_resolve`](Self::get_or_resolve), but memoizes hits only.
    ///
    /// Used by the file façade, whose misses must stay retryable: the
    /// persistent index fills in asynchronously, so a record the host writes
    /// later has to become visible without waiting for a rule edit to bump
    /// the generation.
    pub fn get_or_resolve_hit(
        &self,
        config: &Config,
        icon_type: IconType,
        path: &str,
        resolve: impl FnOnce() -> Option<Arc<Association>>,
    ) -> Option<Arc<Association>> {
        let generation = config.generation();
        if let Some(entry) = self.entries.get(&(icon_type, path.to_owned()))
            && entry.generation == generation
        {
            return entry.result.clone();
        }

        let result = resolve();
        if result.is_some() {
            self.entries.insert(
                (icon_type, path.to_owned()),
                CacheEntry {
                    generation,
                    result: result.clone(),
                },
            );
        }
        result
    }

    /// Number of stored entries, live and stale alike.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Physically drops all entries. Generation stamping already provides
    /// invalidation; this only reclaims memory, e.g. on an explicit rebuild.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::ResultCache;
    use crate::config::Config;
    use associations::{Association, IconType};

    fn resolved(name: &str) -> Option<Arc<Association>> {
        Some(Arc::new(Association::new(name, ".*")))
    }

    #[test]
    fn second_lookup_skips_the_resolver() {
        let config = Config::default();
        let cache = ResultCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let hit = cache.get_or_resolve(&config, IconType::File, "a.kt", || {
                calls.fetch_add(1, Ordering::SeqCst);
                resolved("Kotlin")
            });
            assert_eq!(hit.unwrap().name(), "Kotlin");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn misses_are_cached_too() {
        let config = Config::default();
        let cache = ResultCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let miss = cache.get_or_resolve(&config, IconType::File, "a.kt", || {
                calls.fetch_add(1, Ordering::SeqCst);
                None
            });
            assert!(miss.is_none());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn generation_bump_kills_cached_entries() {
        let config = Config::default();
        let cache = ResultCache::new();

        let first = cache.get_or_resolve(&config, IconType::File, "a.kt", || resolved("Old"));
        assert_eq!(first.unwrap().name(), "Old");

        config.invalidate();

        let second = cache.get_or_resolve(&config, IconType::File, "a.kt", || resolved("New"));
        assert_eq!(second.unwrap().name(), "New");
    }

    #[test]
    fn categories_are_cached_independently() {
        let config = Config::default();
        let cache = ResultCache::new();

        cache.get_or_resolve(&config, IconType::File, "src", || resolved("FileRule"));
        let folder =
            cache.get_or_resolve(&config, IconType::Folder, "src", || resolved("FolderRule"));
        assert_eq!(folder.unwrap().name(), "FolderRule");
    }

    #[test]
    fn hit_only_variant_retries_misses() {
        let config = Config::default();
        let cache = ResultCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let miss = cache.get_or_resolve_hit(&config, IconType::File, "a.kt", || {
                calls.fetch_add(1, Ordering::SeqCst);
                None
            });
            assert!(miss.is_none());
        }
        // Misses are not memoized here, so the resolver ran twice...
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let hit = cache.get_or_resolve_hit(&config, IconType::File, "a.kt", || resolved("Late"));
        assert_eq!(hit.unwrap().name(), "Late");
        // ...but the eventual hit is.
        let cached = cache.get_or_resolve_hit(&config, IconType::File, "a.kt", || {
            panic!("cached hit must not re-resolve")
        });
        assert_eq!(cached.unwrap().name(), "Late");
    }

    #[test]
    fn clear_empties_the_map() {
        let config = Config::default();
        let cache = ResultCache::new();
        cache.get_or_resolve(&config, IconType::File, "a.kt", || resolved("Kotlin"));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
