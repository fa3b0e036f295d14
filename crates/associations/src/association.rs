use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::matcher::{self, MatcherError};
use crate::path_info::PathInfo;

/// Sentinel color token meaning "unset" in persisted and compared forms.
pub const DEFAULT_COLOR: &str = "DEFAULT";

/// Priority assigned to rules created without an explicit one. Lower values
/// win, so user rules default below hand-tuned high-precedence entries.
pub const DEFAULT_PRIORITY: i32 = 100;

/// One pattern-to-styling rule.
///
/// An association couples a case-insensitive regex pattern with an opaque
/// icon reference, optional colors, and a priority. The compiled form of the
/// pattern is memoized on first evaluation and recomputed only when the
/// pattern text changes; a pattern that fails to compile is reported through
/// `tracing` and the rule behaves as never-matching.
///
/// # Examples
///
/// ```
/// use associations::{Association, PathInfo};
///
/// let rule = Association::new("Kotlin", r".*\.kt").with_icon("kotlin.svg");
/// assert!(rule.matches(&PathInfo::new("deep/tree/Main.kt")));
/// assert!(!rule.matches(&PathInfo::new("Main.rs")));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Association {
    name: String,
    #[serde(default = "enabled_default")]
    enabled: bool,
    #[serde(default = "priority_default")]
    priority: i32,
    #[serde(default)]
    icon: String,
    pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    folder_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    folder_icon_color: Option<String>,
    #[serde(skip)]
    compiled: OnceLock<Option<Regex>>,
}

const fn enabled_default() -> bool {
    true
}

const fn priority_default() -> i32 {
    DEFAULT_PRIORITY
}

impl Association {
    /// Creates an enabled rule with the default priority and no styling.
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            priority: DEFAULT_PRIORITY,
            icon: String::new(),
            pattern: pattern.into(),
            icon_color: None,
            folder_color: None,
            folder_icon_color: None,
            compiled: OnceLock::new(),
        }
    }

    /// Sets the resolution priority. Lower values win.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the opaque icon reference passed through to the icon loader.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the primary (icon) color.
    #[must_use]
    pub fn with_icon_color(mut self, color: impl Into<String>) -> Self {
        self.icon_color = Some(color.into());
        self
    }

    /// Sets the folder background color.
    #[must_use]
    pub fn with_folder_color(mut self, color: impl Into<String>) -> Self {
        self.folder_color = Some(color.into());
        self
    }

    /// Sets the folder icon (glyph) color.
    #[must_use]
    pub fn with_folder_icon_color(mut self, color: impl Into<String>) -> Self {
        self.folder_icon_color = Some(color.into());
        self
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Rule display name, also its identity within a set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the rule participates in resolution.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Resolution priority; lower values take precedence.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Opaque icon reference. The engine never interprets it.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Pattern text as authored.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Primary (icon) color, if set.
    #[must_use]
    pub fn icon_color(&self) -> Option<&str> {
        self.icon_color.as_deref()
    }

    /// Folder background color, if set.
    #[must_use]
    pub fn folder_color(&self) -> Option<&str> {
        self.folder_color.as_deref()
    }

    /// Folder icon color, if set.
    #[must_use]
    pub fn folder_icon_color(&self) -> Option<&str> {
        self.folder_icon_color.as_deref()
    }

    /// Flips the enabled flag in place.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Replaces the pattern text and drops the compiled memo.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
        self.compiled = OnceLock::new();
    }

    /// A rule without a name or pattern is a placeholder row from the
    /// settings table. It must never match nor be persisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() || self.pattern.is_empty()
    }

    /// Evaluates the rule against a candidate.
    ///
    /// If the pattern text contains a `/`, the full path is tested; otherwise
    /// only the base name. Compilation happens once per pattern; a pattern
    /// that does not compile yields `false` here, never an error.
    #[must_use]
    pub fn matches(&self, candidate: &PathInfo) -> bool {
        let Some(regex) = self.compiled() else {
            return false;
        };
        let target = if self.pattern.contains('/') {
            candidate.path()
        } else {
            candidate.name()
        };
        regex.is_match(target)
    }

    /// Checks that the pattern compiles, for validation at edit time.
    pub fn validate(&self) -> Result<(), MatcherError> {
        matcher::compile(&self.pattern).map(|_| ())
    }

    /// Copies every field except the identity (`name`) from `other`.
    ///
    /// This is the only sanctioned mutation path for rules living inside a
    /// set; it keeps the compiled memo coherent with the new pattern.
    pub fn apply(&mut self, other: &Self) {
        self.enabled = other.enabled;
        self.priority = other.priority;
        self.icon = other.icon.clone();
        self.icon_color = other.icon_color.clone();
        self.folder_color = other.folder_color.clone();
        self.folder_icon_color = other.folder_icon_color.clone();
        self.set_pattern(other.pattern.clone());
    }

    fn compiled(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| match matcher::compile(&self.pattern) {
                Ok(regex) => Some(regex),
                Err(error) => {
                    warn!(rule = %self.name, %error, "association pattern disabled");
                    None
                }
            })
            .as_ref()
    }
}

impl PartialEq for Association {
    fn eq(&self, other: &Self) -> bool {
        self.enabled == other.enabled
            && self.priority == other.priority
            && self.name == other.name
            && self.icon == other.icon
            && self.pattern == other.pattern
            && color_key(self.icon_color.as_deref()) == color_key(other.icon_color.as_deref())
            && color_key(self.folder_color.as_deref()) == color_key(other.folder_color.as_deref())
            && color_key(self.folder_icon_color.as_deref())
                == color_key(other.folder_icon_color.as_deref())
    }
}

impl Eq for Association {}

// An unset color and the literal sentinel compare equal, mirroring the
// normalization done by the persistent record codec.
fn color_key(color: Option<&str>) -> &str {
    color.unwrap_or(DEFAULT_COLOR)
}
