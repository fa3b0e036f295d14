use std::sync::Arc;

use associations::{Association, IconType, PathInfo};
use indexing::{AssociationIndexer, IndexStore, IndexedFile, ScopeId};
use tracing::debug;

use crate::config::Config;
use crate::scopes::ScopeRegistry;

/// Resolution façade used by the icon-lookup collaborator.
///
/// Ties together the configuration context, the per-scope result caches, and
/// the persistent index store. Category dispatch is a closed two-way split:
///
/// - **Folders** bypass the persistent index entirely and resolve against the
///   live rule set. Folder matching depends only on name and path, is cheap,
///   and the index does not cover directories.
/// - **Files** go memo-first, then to the index store. There is no live
///   fallback for files: a path the host has not indexed yet stays without a
///   custom icon until the indexing pass reaches it, which is the trade that
///   keeps repaint-path matching work off the hot path.
///
/// All methods are safe to call from multiple threads concurrently.
pub struct Resolver<S> {
    config: Arc<Config>,
    store: S,
    indexer: AssociationIndexer,
    scopes: ScopeRegistry,
}

impl<S: IndexStore> Resolver<S> {
    /// Builds a façade over a configuration context and an index substrate.
    pub fn new(config: Arc<Config>, store: S) -> Self {
        Self {
            config,
            store,
            indexer: AssociationIndexer,
            scopes: ScopeRegistry::new(),
        }
    }

    /// The shared configuration context.
    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The index substrate.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Resolves the association to display for a path, or `None` for the
    /// host's default icon.
    #[must_use]
    pub fn resolve_for_display(
        &self,
        candidate: &PathInfo,
        icon_type: IconType,
        scope: &ScopeId,
    ) -> Option<Arc<Association>> {
        let cache = self.scopes.cache_for(scope);
        match icon_type {
            IconType::Folder => {
                if !self.config.folders_enabled() {
                    return None;
                }
                cache.get_or_resolve(&self.config, icon_type, candidate.path(), || {
                    self.config.resolve_folder(candidate).map(Arc::new)
                })
            }
            IconType::File => {
                if !self.config.files_enabled() {
                    return None;
                }
                // Hits only: the index fills in as the host scans, so a miss
                // must stay retryable on the next repaint.
                cache.get_or_resolve_hit(&self.config, icon_type, candidate.path(), || {
                    self.store
                        .get(scope, candidate.path())
                        .into_iter()
                        .next()
                        .map(|record| Arc::new(record.into_association()))
                })
            }
        }
    }

    /// Runs the indexing decision for one host-reported path and stores the
    /// outcome, mirroring what the host's indexing pass does per file.
    ///
    /// Returns whether a record was written. A path that produces no record
    /// has any previous record dropped, so renames and rule edits do not
    /// leave stale entries behind.
    pub fn index_path(&self, file: &IndexedFile) -> bool {
        let Some(scope) = file.scope().cloned() else {
            return false;
        };
        let mapped = self.config.with_file_rules(|rules| {
            self.indexer.map(file, rules, self.config.files_enabled())
        });
        match mapped {
            Some((key, record)) => {
                self.store.put(&scope, &key, &record);
                true
            }
            None => {
                self.store.remove(&scope, file.path_info().path());
                false
            }
        }
    }

    /// Drops a deleted path from the index.
    pub fn forget_path(&self, scope: &ScopeId, path: &str) {
        self.store.remove(scope, path);
    }

    /// Reacts to a closed scope: its cache and its index records go away.
    pub fn close_scope(&self, scope: &ScopeId) {
        self.scopes.drop_scope(scope);
        self.store.clear_scope(scope);
    }

    /// Explicit "rebuild associations" command: invalidates every cached
    /// result and reclaims cache memory. The host re-runs its indexing pass
    /// afterwards.
    pub fn rebuild(&self) {
        debug!("rebuild requested, invalidating all cached results");
        self.config.invalidate();
        self.scopes.clear_all();
    }
}
