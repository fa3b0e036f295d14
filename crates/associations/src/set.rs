use serde::{Deserialize, Serialize};

use crate::association::Association;
use crate::path_info::PathInfo;

/// Ordered collection of rules for one category (files or folders).
///
/// The set keeps its rules sorted by ascending priority with a stable sort,
/// so rules sharing a priority keep their definition order. Sorting happens
/// on every mutation, never during lookup, which keeps
/// [`find_association`](Self::find_association) a pure short-circuiting scan.
///
/// # Examples
///
/// ```
/// use associations::{Association, AssociationSet, PathInfo};
///
/// let mut set = AssociationSet::default();
/// set.add(Association::new("Default", ".*").with_priority(100));
/// set.add(Association::new("Rust", r".*\.rs").with_priority(10));
///
/// let hit = set.find_association(&PathInfo::new("main.rs")).unwrap();
/// assert_eq!(hit.name(), "Rust");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Association>", into = "Vec<Association>")]
pub struct AssociationSet {
    associations: Vec<Association>,
}

impl AssociationSet {
    /// Builds a set from the supplied rules, establishing priority order.
    #[must_use]
    pub fn from_associations(associations: Vec<Association>) -> Self {
        let mut set = Self { associations };
        set.reorder();
        set
    }

    /// Returns the single winning rule for `candidate`, or `None`.
    ///
    /// Disabled and empty rules are skipped. The scan runs in ascending
    /// priority order and stops at the first match, which together with the
    /// stable mutation-time sort yields the documented tie-break: lowest
    /// priority first, then definition order.
    #[must_use]
    pub fn find_association(&self, candidate: &PathInfo) -> Option<&Association> {
        self.associations
            .iter()
            .filter(|rule| rule.enabled() && !rule.is_empty())
            .find(|rule| rule.matches(candidate))
    }

    /// Appends a rule and restores priority order.
    pub fn add(&mut self, association: Association) {
        self.associations.push(association);
        self.reorder();
    }

    /// Removes the rule named `name`. Returns whether anything was removed.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let before = self.associations.len();
        self.associations.retain(|rule| rule.name() != name);
        before != self.associations.len()
    }

    /// Replace-by-identity: copies `edited`'s fields onto the existing rule
    /// with the same name. Returns `false` when no such rule exists.
    pub fn apply_changes(&mut self, name: &str, edited: &Association) -> bool {
        let Some(rule) = self
            .associations
            .iter_mut()
            .find(|rule| rule.name() == name)
        else {
            return false;
        };
        rule.apply(edited);
        // The edit may have changed the priority.
        self.reorder();
        true
    }

    /// Swaps in a whole new rule list, as the settings UI does on apply.
    pub fn replace_all(&mut self, associations: Vec<Association>) {
        self.associations = associations;
        self.reorder();
    }

    /// Rules in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &Association> {
        self.associations.iter()
    }

    /// Number of rules, including disabled and empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.associations.len()
    }

    /// Whether the set holds no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.associations.is_empty()
    }

    fn reorder(&mut self) {
        // Stable: equal priorities keep their relative definition order.
        self.associations.sort_by_key(Association::priority);
    }
}

impl From<Vec<Association>> for AssociationSet {
    fn from(associations: Vec<Association>) -> Self {
        Self::from_associations(associations)
    }
}

impl From<AssociationSet> for Vec<Association> {
    fn from(set: AssociationSet) -> Self {
        set.associations
    }
}
