use dashmap::DashMap;
use tracing::{debug, warn};

use crate::codec::{decode_record, encode_record};
use crate::error::IndexError;
use crate::record::{INDEX_VERSION, IndexRecord};
use crate::scope::ScopeId;

/// Contract the persistent key/value substrate must satisfy.
///
/// The engine supplies the codec and the version number; the substrate owns
/// storage, compaction, and scheduling. All methods are infallible from the
/// caller's point of view: a record that cannot be stored or decoded is
/// simply absent until the host's next indexing pass rewrites it.
pub trait IndexStore: Send + Sync {
    /// Stores the record computed for `key` within `scope`, replacing any
    /// previous value (last writer wins; recomputation is pure, so
    /// concurrent writers converge).
    fn put(&self, scope: &ScopeId, key: &str, record: &IndexRecord);

    /// Returns the records stored for `key` within `scope`. At most one
    /// entry exists per key; the sequence shape mirrors the substrate
    /// contract, which does not promise uniqueness.
    fn get(&self, scope: &ScopeId, key: &str) -> Vec<IndexRecord>;

    /// Drops the record for a path deleted from the tree.
    fn remove(&self, scope: &ScopeId, key: &str);

    /// Drops every record belonging to a closed scope.
    fn clear_scope(&self, scope: &ScopeId);
}

/// In-process reference implementation of [`IndexStore`].
///
/// Used by tests and the CLI; real hosts plug in their own substrate. Every
/// record passes through the binary codec and is stamped with the layout
/// version it was written under, so the store exercises the same rebuild
/// behavior a durable substrate must implement: the first read that observes
/// a version mismatch discards the entire store.
///
/// # Examples
///
/// ```
/// use associations::{Association, IconType};
/// use indexing::{IndexRecord, IndexStore, MemoryIndexStore, ScopeId};
///
/// let store = MemoryIndexStore::new();
/// let scope = ScopeId::new("project");
/// let record = IndexRecord::from_association(
///     &Association::new("Kotlin", r".*\.kt"),
///     IconType::File,
/// );
/// store.put(&scope, "src/Main.kt", &record);
/// assert_eq!(store.get(&scope, "src/Main.kt"), vec![record]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryIndexStore {
    version: u32,
    records: DashMap<(ScopeId, String), Vec<u8>>,
}

impl MemoryIndexStore {
    /// Creates an empty store expecting the current layout version.
    #[must_use]
    pub fn new() -> Self {
        Self::with_version(INDEX_VERSION)
    }

    /// Creates an empty store expecting an explicit layout version.
    #[must_use]
    pub fn with_version(version: u32) -> Self {
        Self {
            version,
            records: DashMap::new(),
        }
    }

    /// Simulates a process restart under a new layout version while keeping
    /// the previously written bytes.
    #[must_use]
    pub fn reopened_with_version(self, version: u32) -> Self {
        Self {
            version,
            records: self.records,
        }
    }

    /// Number of stored records across all scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn decode(&self, key: &str, bytes: &[u8]) -> Result<IndexRecord, IndexError> {
        let mut input = bytes;
        let mut version_bytes = [0u8; 4];
        std::io::Read::read_exact(&mut input, &mut version_bytes)?;
        let found = u32::from_be_bytes(version_bytes);
        if found != self.version {
            return Err(IndexError::VersionMismatch {
                found,
                expected: self.version,
            });
        }
        let record = decode_record(&mut input)?;
        debug!(key, "decoded index record");
        Ok(record)
    }
}

impl IndexStore for MemoryIndexStore {
    fn put(&self, scope: &ScopeId, key: &str, record: &IndexRecord) {
        let mut bytes = self.version.to_be_bytes().to_vec();
        if let Err(error) = encode_record(record, &mut bytes) {
            warn!(key, %error, "dropping unencodable index record");
            return;
        }
        self.records.insert((scope.clone(), key.to_owned()), bytes);
    }

    fn get(&self, scope: &ScopeId, key: &str) -> Vec<IndexRecord> {
        let Some(bytes) = self
            .records
            .get(&(scope.clone(), key.to_owned()))
            .map(|entry| entry.value().clone())
        else {
            return Vec::new();
        };

        match self.decode(key, &bytes) {
            Ok(record) => vec![record],
            Err(error @ IndexError::VersionMismatch { .. }) => {
                // Layout changed under us: every stored record predates the
                // running code, so the whole store is rebuilt, not just the
                // touched key.
                warn!(%error, "discarding persistent index for rebuild");
                self.records.clear();
                Vec::new()
            }
            Err(error) => {
                warn!(key, %error, "dropping undecodable index record");
                self.records.remove(&(scope.clone(), key.to_owned()));
                Vec::new()
            }
        }
    }

    fn remove(&self, scope: &ScopeId, key: &str) {
        self.records.remove(&(scope.clone(), key.to_owned()));
    }

    fn clear_scope(&self, scope: &ScopeId) {
        self.records.retain(|(owner, _), _| owner != scope);
    }
}
