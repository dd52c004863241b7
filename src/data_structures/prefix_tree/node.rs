//! Node implementation for the prefix tree.
//!
//! Nodes live in the tree's arena and refer to their children by [`NodeId`].
//! Each node keeps its outgoing edges in the order their characters were
//! first inserted, with a hash index on the side for constant-time lookup.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Handle of a node inside the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root always occupies the first arena slot.
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Insertion-ordered map from a character to a child node.
#[derive(Debug, Default, Clone)]
pub(crate) struct Children {
    /// Edges in first-insertion order
    edges: Vec<(char, NodeId)>,

    /// Character to child lookup
    index: HashMap<char, NodeId, FnvBuildHasher>,
}

impl Children {
    /// Returns the child reached through `c`, if any.
    pub(crate) fn get(&self, c: char) -> Option<NodeId> {
        self.index.get(&c).copied()
    }

    /// Records a new edge. Returns `false` if `c` already had a child,
    /// in which case the existing edge is kept.
    pub(crate) fn insert(&mut self, c: char, child: NodeId) -> bool {
        if self.index.contains_key(&c) {
            return false;
        }
        self.index.insert(c, child);
        self.edges.push((c, child));
        true
    }

    /// Iterates over the edges in first-insertion order.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = (char, NodeId)> + '_ {
        self.edges.iter().copied()
    }
}

/// A vertex of the prefix tree.
///
/// The node reached by consuming `c1..ck` from the root stands for the string
/// `c1..ck`. A word is recorded only when that exact string was inserted.
#[derive(Debug, Default, Clone)]
pub(crate) struct TrieNode {
    /// Word ending exactly at this node, as it was stored
    pub(crate) word: Option<String>,

    /// Outgoing edges
    pub(crate) children: Children,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self::default()
    }
}
