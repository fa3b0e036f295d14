#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `indexing` defines the durable side of association resolution: the
//! [`IndexRecord`] snapshot of a winning rule, its fixed-order binary codec,
//! the [`AssociationIndexer`] that turns host-reported files into records,
//! and the [`IndexStore`] contract a persistent key/value substrate must
//! satisfy. The substrate itself (storage, compaction, scheduling of re-index
//! passes) belongs to the host; this crate only owns the record layout and
//! the indexing decision.
//!
//! # Design
//!
//! - The codec writes the nine record fields in one fixed order with
//!   Java-`DataOutput`-compatible primitives (bool as a single byte,
//!   big-endian `i32`, strings as 16-bit-length-prefixed UTF-8). Unset colors
//!   are stored as the `DEFAULT` sentinel and normalized back to unset on
//!   read.
//! - Any change to field order, count, or types is a breaking format change
//!   and must bump [`INDEX_VERSION`]; consumers respond by discarding every
//!   stored record and rebuilding, never by migrating in place.
//! - [`AssociationIndexer`] is content-independent
//!   ([`depends_on_content`](AssociationIndexer::depends_on_content) is
//!   `false`): a record is a function of the path and the live rule set only.
//!   Directories are never indexed; folder associations resolve live.
//! - [`MemoryIndexStore`] is a reference substrate used by tests and the CLI.
//!   It runs every record through the codec so the bit-exact contract stays
//!   exercised, and it drops records stamped with a stale version on read.
//!
//! # Errors
//!
//! [`IndexError`] covers codec failures (truncation, oversized strings,
//! unknown icon-type tokens) and version mismatches. None of these reach a
//! resolution caller: a store that cannot decode a record treats it as
//! absent, logs the condition, and lets the host's next indexing pass rewrite
//! it.
//!
//! # Examples
//!
//! ```
//! use associations::{Association, IconType};
//! use indexing::{IndexRecord, decode_record, encode_record};
//!
//! let rule = Association::new("Kotlin", r".*\.kt").with_icon("kotlin.svg");
//! let record = IndexRecord::from_association(&rule, IconType::File);
//!
//! let mut bytes = Vec::new();
//! encode_record(&record, &mut bytes).unwrap();
//! let back = decode_record(&mut bytes.as_slice()).unwrap();
//! assert_eq!(back, record);
//! ```
//!
//! # See also
//!
//! - `associations` for the live rule model the records snapshot.
//! - `resolver` for the façade that reads records back out of a store.

mod codec;
mod error;
mod indexer;
mod record;
mod scope;
mod store;

pub use codec::{decode_record, encode_record};
pub use error::IndexError;
pub use indexer::{AssociationIndexer, IndexedFile};
pub use record::{INDEX_VERSION, IndexRecord};
pub use scope::ScopeId;
pub use store::{IndexStore, MemoryIndexStore};
