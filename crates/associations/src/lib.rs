#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `associations` provides the rule model and best-match resolution used to
//! attach icons and colors to paths in a project tree. An [`Association`]
//! pairs a case-insensitive regular expression with styling metadata and a
//! priority; an [`AssociationSet`] holds the rules for one category (files or
//! folders) and selects the single winning rule for a candidate path.
//!
//! # Design
//!
//! - [`Association`] owns its pattern text and memoizes the compiled regex on
//!   first use. Patterns containing a `/` are evaluated against the full
//!   normalized path; all other patterns are evaluated against the base name
//!   only, so name globs and path-scoped rules share one syntax.
//! - [`AssociationSet`] keeps its rules sorted by ascending priority (stable,
//!   so insertion order breaks ties) and re-sorts on mutation, never per
//!   lookup. Resolution is a short-circuiting linear scan, which is the right
//!   trade for user-curated sets of tens to low hundreds of rules.
//! - [`PathInfo`] carries the pre-split (base name, full path) pair so
//!   matching never touches the filesystem.
//!
//! # Invariants
//!
//! - Resolution is deterministic: for a fixed set and path, the same rule (or
//!   `None`) is returned on every call.
//! - A disabled rule, or one with an empty name or pattern, never wins.
//! - If several enabled rules match, the numerically lowest priority wins;
//!   equal priorities fall back to definition order.
//!
//! # Errors
//!
//! A pattern that fails to compile never fails resolution: the rule is logged
//! once through `tracing` and behaves as never-matching from then on.
//! [`MatcherError`] is only surfaced through [`Association::validate`], which
//! settings UIs can call before accepting user input.
//!
//! # Examples
//!
//! ```
//! use associations::{Association, AssociationSet, PathInfo};
//!
//! let set = AssociationSet::from_associations(vec![
//!     Association::new("Kotlin", r".*\.kt").with_priority(10),
//!     Association::new("Default", ".*").with_priority(100),
//! ]);
//!
//! let hit = set.find_association(&PathInfo::new("src/Main.kt")).unwrap();
//! assert_eq!(hit.name(), "Kotlin");
//! let fallback = set.find_association(&PathInfo::new("README")).unwrap();
//! assert_eq!(fallback.name(), "Default");
//! ```
//!
//! # See also
//!
//! - `indexing` for the durable snapshot format of a resolved rule.
//! - `resolver` for the cache and façade layers built on top of this crate.

mod association;
mod category;
mod matcher;
mod path_info;
mod set;

pub use association::{Association, DEFAULT_COLOR, DEFAULT_PRIORITY};
pub use category::IconType;
pub use matcher::MatcherError;
pub use path_info::PathInfo;
pub use set::AssociationSet;
