//! Index construction and query evaluation.
//!
//! An [`Index`] owns an immutable snapshot plus a prefix trie and a suffix
//! trie over its text elements. Searching evaluates each predicate to a
//! position set, intersects within an AND-group, unions across OR-groups
//! and returns the hits in ascending position order.

use std::collections::BTreeSet;

use log::Level;

use crate::config::IndexConfig;
use crate::error::Result;
use crate::predicate::Predicate;
use crate::query::{AndGroup, Query};
use crate::scan;
use crate::trie::Trie;
use crate::value::Element;

/// One search result: a snapshot element and its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    /// The matched element.
    pub value: &'a Element,
    /// The element's 0-based position in the snapshot.
    pub position: usize,
}

impl Hit<'_> {
    /// Clones the value out of the index.
    pub fn into_owned(self) -> (Element, usize) {
        (self.value.clone(), self.position)
    }
}

/// A searchable snapshot of scalar elements.
///
/// Both tries are built eagerly at construction over the full snapshot:
/// text elements contribute nodes, numeric elements contribute none but keep
/// their positions. Every predicate therefore reports positions in the same
/// space, the index of the element in the snapshot.
///
/// The index never observes the collection it was built from. Rebuild it
/// (or use [`LiveIndex`](crate::LiveIndex)) when the source changes.
///
/// # Example
///
/// ```
/// use sifter::{Element, Index};
///
/// let index = Index::build(vec!["apple".into(), "app".into(), "banana".into(), "grape".into()]);
///
/// let positions: Vec<usize> = index.search("$app").iter().map(|hit| hit.position).collect();
/// assert_eq!(positions, vec![0, 1]);
///
/// let hits = index.search("$gr | ana$");
/// assert_eq!(hits[0].value, &Element::from("banana"));
/// assert_eq!(hits[1].position, 3);
/// ```
#[derive(Debug)]
pub struct Index {
    elements: Vec<Element>,
    prefix: Trie,
    suffix: Trie,
    config: IndexConfig,
}

impl Index {
    /// Builds an index with the default configuration.
    pub fn build(snapshot: Vec<Element>) -> Self {
        Index::with_config(snapshot, IndexConfig::default())
    }

    /// Builds an index with an explicit configuration.
    pub fn with_config(snapshot: Vec<Element>, config: IndexConfig) -> Self {
        let texts = || {
            snapshot
                .iter()
                .enumerate()
                .filter_map(|(position, element)| Some((position, element.as_text()?)))
        };
        let prefix = Trie::build(texts());
        let suffix = Trie::build_reversed(texts());

        if config.enabled(Level::Debug) {
            config.emit(
                Level::Debug,
                format_args!(
                    "built index over {} elements ({} text), prefix trie {} nodes, suffix trie {} nodes",
                    snapshot.len(),
                    texts().count(),
                    prefix.node_count(),
                    suffix.node_count(),
                ),
            );
        }

        Index {
            elements: snapshot,
            prefix,
            suffix,
            config,
        }
    }

    /// Builds an index from a JSON array of strings and numbers.
    pub fn from_json(json: &str) -> Result<Self> {
        Index::from_json_with_config(json, IndexConfig::default())
    }

    /// Builds an index from a JSON array with an explicit configuration.
    pub fn from_json_with_config(json: &str, config: IndexConfig) -> Result<Self> {
        let snapshot: Vec<Element> = serde_json::from_str(json)?;
        Ok(Index::with_config(snapshot, config))
    }

    /// Returns the number of elements in the snapshot.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the snapshot.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the element at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Element> {
        self.elements.get(position)
    }

    /// Returns the configuration the index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Positions of text elements starting with `text`.
    pub fn search_prefix(&self, text: &str) -> BTreeSet<usize> {
        self.prefix.walk(text.chars())
    }

    /// Positions of text elements ending with `text`.
    pub fn search_suffix(&self, text: &str) -> BTreeSet<usize> {
        self.suffix.walk(text.chars().rev())
    }

    /// Evaluates one predicate against the snapshot.
    pub fn evaluate(&self, predicate: &Predicate) -> BTreeSet<usize> {
        let matched = self.dispatch(predicate);
        if self.config.enabled(Level::Trace) {
            let source = if predicate.is_trie_backed() {
                "trie"
            } else {
                "scan"
            };
            self.config.emit(
                Level::Trace,
                format_args!(
                    "{} `{}` by {}: {} positions",
                    predicate.as_str(),
                    predicate,
                    source,
                    matched.len(),
                ),
            );
        }
        matched
    }

    fn dispatch(&self, predicate: &Predicate) -> BTreeSet<usize> {
        match predicate {
            Predicate::Prefix(text) => self.search_prefix(text),
            Predicate::Suffix(text) => self.search_suffix(text),
            Predicate::Exact(text) => scan::exact(&self.elements, text),
            Predicate::Contains(text) => scan::contains(&self.elements, text),
            Predicate::GreaterThan(n) => scan::greater_than(&self.elements, *n),
            Predicate::LessThan(n) => scan::less_than(&self.elements, *n),
            Predicate::EqualNumber(n) => scan::equal_number(&self.elements, *n),
        }
    }

    /// Evaluates a parsed query to its matching positions.
    pub fn positions(&self, query: &Query) -> BTreeSet<usize> {
        query
            .groups()
            .iter()
            .flat_map(|group| self.evaluate_group(group))
            .collect()
    }

    // An empty group contributes nothing; it is never the universal set.
    // Trie walks go first so an empty result skips the linear scans.
    fn evaluate_group(&self, group: &AndGroup) -> BTreeSet<usize> {
        let mut ordered: Vec<&Predicate> = group.predicates().iter().collect();
        ordered.sort_by_key(|predicate| !predicate.is_trie_backed());
        let mut predicates = ordered.into_iter();
        let Some(first) = predicates.next() else {
            return BTreeSet::new();
        };
        let mut matched = self.evaluate(first);
        for predicate in predicates {
            if matched.is_empty() {
                break;
            }
            let next = self.evaluate(predicate);
            matched.retain(|position| next.contains(position));
        }
        matched
    }

    /// Parses and evaluates `query`.
    ///
    /// Malformed segments are dropped rather than reported, and a query
    /// with nothing left to evaluate returns no hits.
    pub fn search(&self, query: &str) -> Vec<Hit<'_>> {
        self.search_query(&Query::parse(query))
    }

    /// Evaluates an already parsed query.
    pub fn search_query(&self, query: &Query) -> Vec<Hit<'_>> {
        let hits: Vec<Hit<'_>> = self
            .positions(query)
            .into_iter()
            .filter_map(|position| {
                let value = self.elements.get(position)?;
                Some(Hit { value, position })
            })
            .collect();

        if self.config.enabled(Level::Trace) {
            self.config.emit(
                Level::Trace,
                format_args!(
                    "query `{}`: {} groups, {} dropped segments, {} hits",
                    query,
                    query.groups().len(),
                    query.dropped(),
                    hits.len(),
                ),
            );
        }
        hits
    }

    /// Searches with an element as the query.
    ///
    /// Only a text element is a query; any other element returns no hits
    /// without being classified.
    pub fn search_element(&self, query: &Element) -> Vec<Hit<'_>> {
        match query {
            Element::Text(text) => self.search(text),
            other => {
                self.config.emit(
                    Level::Debug,
                    format_args!("ignored non-text query of kind {}", other.kind()),
                );
                Vec::new()
            }
        }
    }
}

impl FromIterator<Element> for Index {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Index::build(iter.into_iter().collect())
    }
}
