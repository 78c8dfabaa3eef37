//! Explicit index lifecycle for a changing collection.
//!
//! An [`Index`] is a snapshot and never refreshes itself. [`LiveIndex`]
//! tracks whether the current snapshot still matches its source and swaps
//! in a freshly built index on [`LiveIndex::rebuild`]. Searches hold their
//! own `Arc` to the index they started with, so a rebuild never changes an
//! index out from under an in-flight query.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use log::Level;

use crate::config::IndexConfig;
use crate::index::Index;
use crate::value::Element;

/// Generation of the source collection an index was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnapshotId(pub u64);

/// Lifecycle state of a [`LiveIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// No index has been built yet.
    Unbuilt,
    /// The current index matches the given source generation.
    Built(SnapshotId),
    /// The source changed after the current index was built.
    Stale,
}

#[derive(Debug)]
struct Current {
    index: Arc<Index>,
    built_from: SnapshotId,
}

/// A rebuildable index shared between readers and a single source.
///
/// The owner of the source collection calls [`mark_changed`] on every
/// mutation and [`rebuild`] when it decides the index must catch up. Neither
/// happens implicitly.
///
/// [`mark_changed`]: LiveIndex::mark_changed
/// [`rebuild`]: LiveIndex::rebuild
///
/// # Example
///
/// ```
/// use sifter::{Element, IndexState, LiveIndex};
///
/// let live = LiveIndex::default();
/// assert_eq!(live.state(), IndexState::Unbuilt);
///
/// let id = live.rebuild(vec![Element::from("apple")]);
/// assert_eq!(live.state(), IndexState::Built(id));
///
/// live.mark_changed();
/// assert_eq!(live.state(), IndexState::Stale);
/// // A stale index still answers from its snapshot.
/// assert_eq!(live.search("$ap").len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LiveIndex {
    generation: AtomicU64,
    current: RwLock<Option<Current>>,
    config: IndexConfig,
}

impl LiveIndex {
    /// Creates an unbuilt index with the given configuration.
    pub fn new(config: IndexConfig) -> Self {
        LiveIndex {
            generation: AtomicU64::new(0),
            current: RwLock::new(None),
            config,
        }
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> IndexState {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        match current.as_ref() {
            None => IndexState::Unbuilt,
            Some(current) if current.built_from == self.source_generation() => {
                IndexState::Built(current.built_from)
            }
            Some(_) => IndexState::Stale,
        }
    }

    /// Records that the source collection changed.
    ///
    /// Only the state moves to [`IndexState::Stale`]; the current index is
    /// left as is until the next [`rebuild`](LiveIndex::rebuild).
    pub fn mark_changed(&self) -> SnapshotId {
        SnapshotId(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Builds a new index from `snapshot` and makes it current.
    ///
    /// The build runs without holding the lock; only the pointer swap is
    /// exclusive. When rebuilds overlap, an index built from an older
    /// generation never replaces one built from a newer generation. Returns
    /// the source generation of the index that is current afterwards.
    pub fn rebuild(&self, snapshot: Vec<Element>) -> SnapshotId {
        let built_from = self.source_generation();
        let len = snapshot.len();
        let index = Arc::new(Index::with_config(snapshot, self.config.clone()));

        let current = self.install(index, built_from);
        if current == built_from {
            self.config.emit(
                Level::Info,
                format_args!(
                    "rebuilt index over {} elements at generation {}",
                    len, built_from.0
                ),
            );
        } else {
            self.config.emit(
                Level::Debug,
                format_args!(
                    "discarded rebuild at generation {}, current is {}",
                    built_from.0, current.0
                ),
            );
        }
        current
    }

    fn install(&self, index: Arc<Index>, built_from: SnapshotId) -> SnapshotId {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        match current.as_ref() {
            Some(newer) if newer.built_from > built_from => newer.built_from,
            _ => {
                *current = Some(Current { index, built_from });
                built_from
            }
        }
    }

    /// Returns the current index, if one has been built.
    pub fn current(&self) -> Option<Arc<Index>> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current.as_ref().map(|current| Arc::clone(&current.index))
    }

    /// Searches the current index.
    ///
    /// Returns no hits while unbuilt. A stale index is still searched; the
    /// caller decides when staleness warrants a rebuild.
    pub fn search(&self, query: &str) -> Vec<(Element, usize)> {
        let Some(index) = self.current() else {
            self.config.emit(
                Level::Debug,
                format_args!("search `{}` on unbuilt index", query),
            );
            return Vec::new();
        };
        if self.state() == IndexState::Stale {
            self.config.emit(
                Level::Debug,
                format_args!("search `{}` on stale index", query),
            );
        }
        index
            .search(query)
            .into_iter()
            .map(|hit| hit.into_owned())
            .collect()
    }

    fn source_generation(&self) -> SnapshotId {
        SnapshotId(self.generation.load(Ordering::Acquire))
    }
}
