//! Character tries over snapshot text.
//!
//! Every node on a word's path records the word's position, not only the
//! terminal node. A walk of any length therefore lands on a precomputed
//! position list and never needs to visit descendants.

use std::collections::{BTreeSet, HashMap};

/// A node in a character-keyed trie.
///
/// Children are owned exclusively, so the structure is always a tree.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    positions: Vec<usize>,
}

impl TrieNode {
    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Positions of every indexed word whose path passes through this node.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    fn count(&self) -> usize {
        let mut stack = vec![self];
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

// Paths are as deep as the longest word, so teardown must not recurse.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// A rooted character trie.
///
/// Build the prefix trie with [`Trie::build`] and the suffix trie with
/// [`Trie::build_reversed`]; both take `(position, word)` pairs so callers
/// keep a single position space even when some snapshot entries are not
/// text.
///
/// # Example
///
/// ```
/// use sifter::Trie;
///
/// let trie = Trie::build([(0, "apple"), (1, "app"), (3, "grape")]);
/// assert_eq!(trie.walk("app".chars()).into_iter().collect::<Vec<_>>(), vec![0, 1]);
/// assert!(trie.walk("b".chars()).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Builds a trie keyed by each word's characters in order.
    pub fn build<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut trie = Trie::default();
        for (position, word) in words {
            trie.insert(position, word.chars());
        }
        trie
    }

    /// Builds a trie keyed by each word's characters in reverse.
    pub fn build_reversed<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut trie = Trie::default();
        for (position, word) in words {
            trie.insert(position, word.chars().rev());
        }
        trie
    }

    fn insert(&mut self, position: usize, chars: impl Iterator<Item = char>) {
        let mut node = &mut self.root;
        for c in chars {
            node = node.children.entry(c).or_default();
            node.positions.push(position);
        }
    }

    /// Walks `chars` from the root and returns the final node's positions.
    ///
    /// A missing edge yields the empty set. The root itself carries no
    /// positions, so an empty walk matches nothing. The returned set is a
    /// copy; callers cannot reach trie state through it.
    pub fn walk(&self, chars: impl IntoIterator<Item = char>) -> BTreeSet<usize> {
        let mut node = &self.root;
        for c in chars {
            match node.child(c) {
                Some(next) => node = next,
                None => return BTreeSet::new(),
            }
        }
        node.positions.iter().copied().collect()
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}
