use associations::{AssociationSet, IconType, PathInfo};
use tracing::debug;

use crate::record::{INDEX_VERSION, IndexRecord};
use crate::scope::ScopeId;

/// Per-path input handed to the indexer by the host's file substrate.
///
/// The engine never walks the tree itself; the host reports each path along
/// with the metadata the [`AssociationIndexer::accepts_input`] gate needs.
#[derive(Clone, Debug)]
pub struct IndexedFile {
    path_info: PathInfo,
    is_directory: bool,
    is_local: bool,
    is_excluded: bool,
    scope: Option<ScopeId>,
}

impl IndexedFile {
    /// Describes a local, non-excluded file owned by `scope`.
    #[must_use]
    pub fn new(path: impl AsRef<std::path::Path>, scope: ScopeId) -> Self {
        Self {
            path_info: PathInfo::new(path),
            is_directory: false,
            is_local: true,
            is_excluded: false,
            scope: Some(scope),
        }
    }

    /// Marks the path as a directory.
    #[must_use]
    pub const fn directory(mut self, is_directory: bool) -> Self {
        self.is_directory = is_directory;
        self
    }

    /// Marks the path as living outside the local filesystem.
    #[must_use]
    pub const fn remote(mut self) -> Self {
        self.is_local = false;
        self
    }

    /// Marks the path as excluded by project configuration.
    #[must_use]
    pub const fn excluded(mut self) -> Self {
        self.is_excluded = true;
        self
    }

    /// Detaches the path from any owning scope.
    #[must_use]
    pub fn without_scope(mut self) -> Self {
        self.scope = None;
        self
    }

    /// Candidate form used for matching.
    #[must_use]
    pub const fn path_info(&self) -> &PathInfo {
        &self.path_info
    }

    /// Whether the path is a directory.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Owning scope, if one could be determined.
    #[must_use]
    pub const fn scope(&self) -> Option<&ScopeId> {
        self.scope.as_ref()
    }
}

/// Computes the index record (if any) for each path the host re-scans.
///
/// The indexer mirrors live resolution but additionally gates on the global
/// file-icons flag, so a disabled feature produces an empty index instead of
/// stale records. It is deliberately content-independent: the record for a
/// path depends only on the path and the current rule set, which is why the
/// host may skip re-indexing on content-only changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssociationIndexer;

impl AssociationIndexer {
    /// Declared layout version. Bumping it forces every consumer to discard
    /// stored records and rebuild.
    #[must_use]
    pub const fn version(self) -> u32 {
        INDEX_VERSION
    }

    /// Records are a pure function of path and rule set, never file content.
    #[must_use]
    pub const fn depends_on_content(self) -> bool {
        false
    }

    /// Directories are excluded from the index; folder associations resolve
    /// against the live rule set instead.
    #[must_use]
    pub const fn index_directories(self) -> bool {
        false
    }

    /// Input gate: only local, non-excluded paths with a known owning scope
    /// are indexable. A path without a scope is skipped, not an error.
    #[must_use]
    pub fn accepts_input(self, file: &IndexedFile) -> bool {
        file.is_local && !file.is_excluded && file.scope.is_some()
    }

    /// Produces zero or one `(path, record)` entry for a re-scanned path.
    ///
    /// Returns `None` when the input gate rejects the path, when the path is
    /// a directory, when file icons are globally disabled, or when no enabled
    /// rule matches.
    #[must_use]
    pub fn map(
        self,
        file: &IndexedFile,
        file_rules: &AssociationSet,
        file_icons_enabled: bool,
    ) -> Option<(String, IndexRecord)> {
        if !self.accepts_input(file) {
            debug!(path = file.path_info.path(), "path rejected by index input gate");
            return None;
        }
        if file.is_directory || !file_icons_enabled {
            return None;
        }

        let rule = file_rules.find_association(&file.path_info)?;
        let record = IndexRecord::from_association(rule, IconType::File);
        Some((file.path_info.path().to_owned(), record))
    }
}

#[cfg(test)]
mod tests {
    use super::{AssociationIndexer, IndexedFile};
    use crate::scope::ScopeId;
    use associations::{Association, AssociationSet};

    fn rules() -> AssociationSet {
        AssociationSet::from_associations(vec![
            Association::new("Kotlin", r".*\.kt").with_priority(10),
            Association::new("Default", ".*").with_priority(100),
        ])
    }

    fn scope() -> ScopeId {
        ScopeId::new("project-a")
    }

    #[test]
    fn matching_file_produces_one_record() {
        let indexer = AssociationIndexer;
        let file = IndexedFile::new("src/Main.kt", scope());
        let (key, record) = indexer.map(&file, &rules(), true).unwrap();
        assert_eq!(key, "src/Main.kt");
        assert_eq!(record.name(), "Kotlin");
    }

    #[test]
    fn directories_are_never_indexed() {
        let indexer = AssociationIndexer;
        assert!(!indexer.index_directories());
        let dir = IndexedFile::new("src", scope()).directory(true);
        assert!(indexer.map(&dir, &rules(), true).is_none());
    }

    #[test]
    fn disabled_file_icons_produce_no_records() {
        let indexer = AssociationIndexer;
        let file = IndexedFile::new("src/Main.kt", scope());
        assert!(indexer.map(&file, &rules(), false).is_none());
    }

    #[test]
    fn gate_rejects_remote_excluded_and_scopeless_paths() {
        let indexer = AssociationIndexer;
        assert!(!indexer.accepts_input(&IndexedFile::new("a.kt", scope()).remote()));
        assert!(!indexer.accepts_input(&IndexedFile::new("a.kt", scope()).excluded()));
        assert!(!indexer.accepts_input(&IndexedFile::new("a.kt", scope()).without_scope()));
        assert!(indexer.map(&IndexedFile::new("a.kt", scope()).remote(), &rules(), true).is_none());
    }

    #[test]
    fn unmatched_path_produces_no_record() {
        let indexer = AssociationIndexer;
        let only_kotlin =
            AssociationSet::from_associations(vec![Association::new("Kotlin", r".*\.kt")]);
        let file = IndexedFile::new("main.rs", scope());
        assert!(indexer.map(&file, &only_kotlin, true).is_none());
    }

    #[test]
    fn indexer_is_content_independent() {
        assert!(!AssociationIndexer.depends_on_content());
    }
}
