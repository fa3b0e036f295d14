#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `resolver` ties the live rule model and the persistent index together
//! into the lookup path an IDE's project tree actually hits on every
//! repaint: an injected [`Config`] context, per-scope generation-stamped
//! [`ResultCache`]s, and the [`Resolver`] façade that dispatches file and
//! folder lookups to their respective sources.
//!
//! # Design
//!
//! - [`Config`] owns both rule sets and the global enable flags behind a
//!   single monotonically increasing generation counter. Every mutation path
//!   bumps the counter; nothing else is required to invalidate caches.
//! - [`ResultCache`] stamps each entry with the generation it was resolved
//!   under, making "clear the cache" an O(1) counter bump instead of a sweep
//!   and leaving no stale-read window once a rule changes.
//! - [`Resolver`] is the display-facing façade: folders resolve live against
//!   the rule set, files go memo-first and then to the [`IndexStore`]
//!   substrate, with no live fallback on the file hot path.
//!
//! # Concurrency
//!
//! Every operation is safe to call from multiple threads with no ordering
//! guarantees. The rule sets are multi-reader behind an `RwLock`; caches and
//! scope registry are concurrent maps; generations and flags are atomics.
//! Nothing here blocks on I/O — the index substrate's storage scheduling
//! belongs to the host.
//!
//! # Errors
//!
//! None of the resolution entry points return errors. Internal failures
//! (bad patterns, undecodable records) degrade to "no association" plus a
//! `tracing` diagnostic, which the display layer renders as the default
//! icon.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use associations::{Association, AssociationSet, IconType, PathInfo};
//! use indexing::{IndexedFile, MemoryIndexStore, ScopeId};
//! use resolver::{Config, Resolver};
//!
//! let config = Arc::new(Config::new(
//!     AssociationSet::from_associations(vec![
//!         Association::new("Kotlin", r".*\.kt")
//!             .with_priority(10)
//!             .with_icon("kotlin.svg"),
//!     ]),
//!     AssociationSet::default(),
//! ));
//! let resolver = Resolver::new(config, MemoryIndexStore::new());
//!
//! let scope = ScopeId::new("demo");
//! resolver.index_path(&IndexedFile::new("src/Main.kt", scope.clone()));
//!
//! let hit = resolver
//!     .resolve_for_display(&PathInfo::new("src/Main.kt"), IconType::File, &scope)
//!     .unwrap();
//! assert_eq!(hit.name(), "Kotlin");
//! assert_eq!(hit.icon(), "kotlin.svg");
//! ```
//!
//! # See also
//!
//! - `associations` for the rule model and matching semantics.
//! - `indexing` for the record layout and substrate contract.

mod cache;
mod config;
mod facade;
mod scopes;
mod seed;

pub use cache::ResultCache;
pub use config::Config;
pub use facade::Resolver;
pub use indexing::IndexStore;
pub use scopes::ScopeRegistry;
pub use seed::seed_association;
