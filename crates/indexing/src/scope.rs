use std::fmt;

/// Opaque identifier of a host-managed scope (typically one open project).
///
/// Index lookups and result caches are partitioned by scope so closing a
/// project can drop its entries without touching the others.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScopeId(String);

impl ScopeId {
    /// Wraps a host-supplied scope identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScopeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
