use std::fmt;

use regex::{Regex, RegexBuilder};

/// Error produced when a rule pattern cannot be compiled into a matcher.
#[derive(Clone, Debug)]
pub struct MatcherError {
    pattern: String,
    source: regex::Error,
}

impl MatcherError {
    pub(crate) fn new(pattern: String, source: regex::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to compile association pattern '{}': {}",
            self.pattern, self.source
        )
    }
}

impl std::error::Error for MatcherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Compiles a rule pattern into a full-match, case-insensitive regex.
///
/// The pattern is anchored on both ends so evaluation requires the whole
/// candidate string to match, not a substring. Name-only globs written as
/// regexes (`.*\.kt`) and path-scoped rules (`src/.*\.kt`) both go through
/// this path; the caller decides which candidate string to present.
pub(crate) fn compile(pattern: &str) -> Result<Regex, MatcherError> {
    RegexBuilder::new(&format!(r"\A(?:{pattern})\z"))
        .case_insensitive(true)
        .build()
        .map_err(|source| MatcherError::new(pattern.to_owned(), source))
}
