//! Searching the values of a keyed collection.
//!
//! [`KeyedIndex`] indexes the values of `(key, value)` entries and reports
//! each hit together with its key, so a map-like collection can answer a
//! query with the entries whose values match.

use crate::config::IndexConfig;
use crate::index::Index;
use crate::value::Element;

/// A search hit carrying the key of the matched entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyedHit<'a, K> {
    /// Key of the matched entry.
    pub key: &'a K,
    /// The matched value.
    pub value: &'a Element,
    /// Position of the entry in insertion order.
    pub position: usize,
}

/// An index over the values of keyed entries.
///
/// Entries keep the order they were supplied in; that order is the position
/// space of the underlying [`Index`].
///
/// # Example
///
/// ```
/// use sifter::{Element, KeyedIndex};
///
/// let index = KeyedIndex::build([
///     ("alice", Element::from("admin")),
///     ("bob", Element::Integer(42)),
///     ("carol", Element::from("editor")),
/// ]);
///
/// let keys: Vec<&str> = index.search("$ad | *dit").iter().map(|hit| *hit.key).collect();
/// assert_eq!(keys, vec!["alice", "carol"]);
/// ```
#[derive(Debug)]
pub struct KeyedIndex<K> {
    keys: Vec<K>,
    index: Index,
}

impl<K> KeyedIndex<K> {
    /// Builds a keyed index with the default configuration.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Element)>,
    {
        KeyedIndex::with_config(entries, IndexConfig::default())
    }

    /// Builds a keyed index with an explicit configuration.
    pub fn with_config<I>(entries: I, config: IndexConfig) -> Self
    where
        I: IntoIterator<Item = (K, Element)>,
    {
        let (keys, values): (Vec<K>, Vec<Element>) = entries.into_iter().unzip();
        KeyedIndex {
            keys,
            index: Index::with_config(values, config),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the keys in position order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Returns the value index.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Searches entry values and returns the matching entries.
    pub fn search(&self, query: &str) -> Vec<KeyedHit<'_, K>> {
        self.index
            .search(query)
            .into_iter()
            .filter_map(|hit| {
                Some(KeyedHit {
                    key: self.keys.get(hit.position)?,
                    value: hit.value,
                    position: hit.position,
                })
            })
            .collect()
    }
}

impl<K> FromIterator<(K, Element)> for KeyedIndex<K> {
    fn from_iter<I: IntoIterator<Item = (K, Element)>>(iter: I) -> Self {
        KeyedIndex::build(iter)
    }
}
