use std::path::Path;

/// Pre-split candidate handed to the matcher.
///
/// Carries the base name and the full normalized path of one tree entry so
/// rule evaluation never touches the filesystem. Separators are normalized to
/// `/` regardless of platform, matching the syntax rule authors write
/// patterns in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathInfo {
    name: String,
    path: String,
}

impl PathInfo {
    /// Builds a candidate from a path, deriving the base name from its last
    /// component.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let normalized = normalize(path.as_ref());
        let name = normalized
            .rsplit('/')
            .next()
            .unwrap_or(normalized.as_str())
            .to_owned();
        Self {
            name,
            path: normalized,
        }
    }

    /// Builds a candidate from an already-split (name, path) pair.
    ///
    /// Hosts that track both pieces independently (virtual filesystems,
    /// archive entries) can avoid the re-split done by [`new`](Self::new).
    #[must_use]
    pub fn from_parts(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Directory-relative base name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full normalized path with `/` separators.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn normalize(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if raw.contains('\\') {
        raw.replace('\\', "/")
    } else {
        raw.into_owned()
    }
}
