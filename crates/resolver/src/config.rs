use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use associations::{Association, AssociationSet, PathInfo};
use tracing::debug;

/// Injected configuration context for resolution and indexing.
///
/// Owns the two live rule sets (files and folders), the two global enable
/// flags, and a monotonically increasing generation counter. Every mutation
/// path bumps the generation in the same logical step, which is what the
/// cache layer compares against instead of relying on ad hoc invalidation
/// callbacks: bumping is O(1), race-free under concurrent readers, and
/// leaves no window in which a reader can observe a resolved value for an
/// already-replaced rule as current.
///
/// The context is multi-reader, single-writer-in-practice (rules change only
/// through a settings workflow); readers hold the `RwLock` only for the
/// duration of one resolution scan.
#[derive(Debug)]
pub struct Config {
    file_rules: RwLock<AssociationSet>,
    folder_rules: RwLock<AssociationSet>,
    files_enabled: AtomicBool,
    folders_enabled: AtomicBool,
    generation: AtomicU64,
}

impl Default for Config {
    /// Empty rule sets, both categories enabled.
    fn default() -> Self {
        Self::new(AssociationSet::default(), AssociationSet::default())
    }
}

impl Config {
    /// Builds a context from initial rule sets with both categories enabled.
    #[must_use]
    pub fn new(file_rules: AssociationSet, folder_rules: AssociationSet) -> Self {
        Self {
            file_rules: RwLock::new(file_rules),
            folder_rules: RwLock::new(folder_rules),
            files_enabled: AtomicBool::new(true),
            folders_enabled: AtomicBool::new(true),
            generation: AtomicU64::new(0),
        }
    }

    /// Current generation. Cached results stamped with an older value are
    /// stale and must be recomputed.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Whether file icons are globally enabled.
    #[must_use]
    pub fn files_enabled(&self) -> bool {
        self.files_enabled.load(Ordering::Acquire)
    }

    /// Whether folder icons are globally enabled.
    #[must_use]
    pub fn folders_enabled(&self) -> bool {
        self.folders_enabled.load(Ordering::Acquire)
    }

    /// Toggles file icons globally.
    pub fn set_files_enabled(&self, enabled: bool) {
        self.files_enabled.store(enabled, Ordering::Release);
        self.bump();
    }

    /// Toggles folder icons globally.
    pub fn set_folders_enabled(&self, enabled: bool) {
        self.folders_enabled.store(enabled, Ordering::Release);
        self.bump();
    }

    /// Resolves a file candidate against the live file rule set.
    ///
    /// The winner is cloned out so the lock is not held past the call.
    #[must_use]
    pub fn resolve_file(&self, candidate: &PathInfo) -> Option<Association> {
        self.file_rules
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .find_association(candidate)
            .cloned()
    }

    /// Resolves a folder candidate against the live folder rule set.
    #[must_use]
    pub fn resolve_folder(&self, candidate: &PathInfo) -> Option<Association> {
        self.folder_rules
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .find_association(candidate)
            .cloned()
    }

    /// Read access to the file rule set.
    pub fn with_file_rules<R>(&self, f: impl FnOnce(&AssociationSet) -> R) -> R {
        f(&self
            .file_rules
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner))
    }

    /// Read access to the folder rule set.
    pub fn with_folder_rules<R>(&self, f: impl FnOnce(&AssociationSet) -> R) -> R {
        f(&self
            .folder_rules
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner))
    }

    /// Mutates the file rule set and bumps the generation in the same
    /// logical step.
    pub fn update_file_rules<R>(&self, f: impl FnOnce(&mut AssociationSet) -> R) -> R {
        let result = f(&mut self
            .file_rules
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner));
        self.bump();
        result
    }

    /// Mutates the folder rule set and bumps the generation in the same
    /// logical step.
    pub fn update_folder_rules<R>(&self, f: impl FnOnce(&mut AssociationSet) -> R) -> R {
        let result = f(&mut self
            .folder_rules
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner));
        self.bump();
        result
    }

    /// Explicit "rebuild associations" command: nothing changes except the
    /// generation, which kills every cached result at once.
    pub fn invalidate(&self) {
        self.bump();
    }

    fn bump(&self) {
        let next = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(generation = next, "configuration generation bumped");
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use associations::{Association, AssociationSet, PathInfo};

    fn config() -> Config {
        Config::new(
            AssociationSet::from_associations(vec![
                Association::new("Kotlin", r".*\.kt").with_priority(10),
            ]),
            AssociationSet::from_associations(vec![
                Association::new("Sources", "src").with_priority(10),
            ]),
        )
    }

    #[test]
    fn categories_never_cross_match() {
        let config = config();
        assert!(config.resolve_file(&PathInfo::new("src")).is_none());
        assert!(config.resolve_folder(&PathInfo::new("Main.kt")).is_none());
        assert!(config.resolve_file(&PathInfo::new("Main.kt")).is_some());
        assert!(config.resolve_folder(&PathInfo::new("src")).is_some());
    }

    #[test]
    fn every_mutation_path_bumps_the_generation() {
        let config = config();
        let mut last = config.generation();

        config.update_file_rules(|rules| rules.add(Association::new("Rust", r".*\.rs")));
        assert!(config.generation() > last);
        last = config.generation();

        config.update_folder_rules(|rules| {
            rules.remove_by_name("Sources");
        });
        assert!(config.generation() > last);
        last = config.generation();

        config.set_files_enabled(false);
        assert!(config.generation() > last);
        last = config.generation();

        config.set_folders_enabled(false);
        assert!(config.generation() > last);
        last = config.generation();

        config.invalidate();
        assert!(config.generation() > last);
    }

    #[test]
    fn resolution_reflects_applied_edits() {
        let config = config();
        let edited = Association::new("Kotlin", r".*\.kts").with_priority(10);
        config.update_file_rules(|rules| {
            assert!(rules.apply_changes("Kotlin", &edited));
        });
        assert!(config.resolve_file(&PathInfo::new("Main.kt")).is_none());
        assert!(config.resolve_file(&PathInfo::new("build.gradle.kts")).is_some());
    }

    #[test]
    fn flags_default_on() {
        let config = config();
        assert!(config.files_enabled());
        assert!(config.folders_enabled());
    }
}
