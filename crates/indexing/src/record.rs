use associations::{Association, IconType};

/// Layout version of the serialized record.
///
/// Any change to field order, count, or primitive types is a breaking format
/// change and must bump this constant. Consumers react by discarding every
/// stored record and rebuilding from the live rule set; there is no partial
/// migration.
pub const INDEX_VERSION: u32 = 3;

/// Durable snapshot of one resolved association, keyed by path in the store.
///
/// Field order here is the serialization order; see the crate docs for the
/// byte layout. Colors are `None` in memory and the `DEFAULT` sentinel on
/// disk — the codec normalizes in both directions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexRecord {
    pub(crate) enabled: bool,
    pub(crate) priority: i32,
    pub(crate) icon_type: IconType,
    pub(crate) name: String,
    pub(crate) icon: String,
    pub(crate) pattern: String,
    pub(crate) icon_color: Option<String>,
    pub(crate) folder_color: Option<String>,
    pub(crate) folder_icon_color: Option<String>,
}

impl IndexRecord {
    /// Snapshots a winning rule under the given category.
    #[must_use]
    pub fn from_association(rule: &Association, icon_type: IconType) -> Self {
        Self {
            enabled: rule.enabled(),
            priority: rule.priority(),
            icon_type,
            name: rule.name().to_owned(),
            icon: rule.icon().to_owned(),
            pattern: rule.pattern().to_owned(),
            icon_color: rule.icon_color().map(str::to_owned),
            folder_color: rule.folder_color().map(str::to_owned),
            folder_icon_color: rule.folder_icon_color().map(str::to_owned),
        }
    }

    /// Reconstructs the live rule form of the snapshot.
    #[must_use]
    pub fn into_association(self) -> Association {
        let mut rule = Association::new(self.name, self.pattern)
            .with_priority(self.priority)
            .with_icon(self.icon)
            .with_enabled(self.enabled);
        if let Some(color) = self.icon_color {
            rule = rule.with_icon_color(color);
        }
        if let Some(color) = self.folder_color {
            rule = rule.with_folder_color(color);
        }
        if let Some(color) = self.folder_icon_color {
            rule = rule.with_folder_icon_color(color);
        }
        rule
    }

    /// Category the record was resolved under.
    #[must_use]
    pub const fn icon_type(&self) -> IconType {
        self.icon_type
    }

    /// Name of the rule the record snapshots.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque icon reference carried through from the rule.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Priority of the snapshotted rule.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::IndexRecord;
    use associations::{Association, IconType};

    #[test]
    fn snapshot_and_reconstruction_are_inverse() {
        let rule = Association::new("Kotlin", r".*\.kt")
            .with_priority(10)
            .with_icon("kotlin.svg")
            .with_icon_color("#A97BFF");
        let record = IndexRecord::from_association(&rule, IconType::File);
        assert_eq!(record.into_association(), rule);
    }

    #[test]
    fn unset_colors_stay_unset() {
        let rule = Association::new("Plain", ".*");
        let record = IndexRecord::from_association(&rule, IconType::File);
        let back = record.into_association();
        assert_eq!(back.icon_color(), None);
        assert_eq!(back.folder_color(), None);
        assert_eq!(back.folder_icon_color(), None);
    }
}
