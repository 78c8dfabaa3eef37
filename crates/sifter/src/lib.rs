//! Sifter - Trie-backed secondary index over scalar collections.
//!
//! Sifter takes a snapshot of an ordered collection of text and numeric
//! values and answers compact textual queries against it:
//!
//! - Prefix and suffix matching through precomputed tries
//! - Exact, substring and numeric comparison by linear scan
//! - AND (`&`) within a group, OR (`|`) across groups
//! - Hits returned in ascending snapshot position
//!
//! # Quick Start
//!
//! ```rust
//! use sifter::{Element, Index};
//!
//! let index = Index::build(vec![
//!     "apple".into(),
//!     "app".into(),
//!     "banana".into(),
//!     "grape".into(),
//! ]);
//!
//! let hits = index.search("$app & *e");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].value, &Element::from("apple"));
//! assert_eq!(hits[0].position, 0);
//! ```
//!
//! # Query Syntax
//!
//! | Form | Predicate | Applies to |
//! |------|-----------|------------|
//! | `$text$` | exact match | text |
//! | `$text` | starts with | text |
//! | `text$` | ends with | text |
//! | `*text` | contains | text |
//! | `>n` | greater than | numbers |
//! | `<n` | less than | numbers |
//! | `=n` | equal to | numbers |
//!
//! ```text
//! query      := or_group ('|' or_group)*
//! or_group   := predicate ('&' predicate)*
//! ```
//!
//! # Query Semantics
//!
//! Parsing is best-effort. Segments that match no form, and numeric forms
//! whose operand does not parse, are dropped from their group. A group left
//! with no predicates contributes nothing:
//!
//! ```text
//! result = ⋃ over OR-groups ( ⋂ over the group's predicates )
//!          where an empty group yields ∅
//! ```
//!
//! Exact matching returns every equal element, like every other predicate.
//! Text predicates never match numbers and numeric predicates never parse
//! text.
//!
//! # Lifecycle
//!
//! An [`Index`] is an immutable snapshot. Use [`LiveIndex`] to track
//! staleness against a changing source and to swap in rebuilt indexes
//! safely while other threads search.

mod config;
mod error;
mod index;
mod keyed;
mod live;
mod predicate;
mod query;
mod scan;
mod trie;
mod value;

// Re-export public API
pub use config::{IndexConfig, LOG_TARGET};
pub use error::{Result, SifterError};
pub use index::{Hit, Index};
pub use keyed::{KeyedHit, KeyedIndex};
pub use live::{IndexState, LiveIndex, SnapshotId};
pub use log::LevelFilter;
pub use predicate::Predicate;
pub use query::{looks_like_query, AndGroup, Lookup, Query, QUERY_CHARS};
pub use trie::{Trie, TrieNode};
pub use value::{Element, Number};
