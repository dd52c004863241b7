// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Tree Implementation
//!
//! This module provides a trie for storing a set of words and enumerating
//! every stored word that starts with a given prefix.
//!
//! # Features
//!
//! - Optional lowercase folding of words at insertion time.
//! - Deterministic output: children are visited in the order their
//!   character was first inserted, and a node's own word precedes the
//!   words below it.
//! - Arena-backed nodes with iterative traversals, so very long words
//!   cannot exhaust the stack.
//!
//! # Example
//!
//! ```
//! use prefix_tree_lib::data_structures::prefix_tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.insert_all(["apple", "app", "apply", "banana"]);
//!
//! assert_eq!(tree.match_prefix("app").unwrap(), vec!["app", "apple", "apply"]);
//! assert!(tree.contains("app"));
//! assert!(!tree.contains("App"));
//! ```

mod error;
mod node;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub use error::PrefixTreeError;
use node::{NodeId, TrieNode};

/// Result type for prefix tree operations
pub type PrefixTreeResult<T> = Result<T, PrefixTreeError>;

/// Configuration options for the prefix tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTreeConfig {
    /// Whether words are lowercased before they are stored
    pub case_fold: bool,
}

impl Default for PrefixTreeConfig {
    fn default() -> Self {
        Self { case_fold: true }
    }
}

/// A prefix tree over `char` keys.
///
/// The tree owns every node in a single arena. The root sits in the first
/// slot and children are addressed by arena index, so there is no shared
/// ownership and no back reference anywhere in the structure.
///
/// Mutation takes `&mut self`; callers sharing a tree between threads are
/// expected to wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    /// Node arena, root first
    nodes: Vec<TrieNode>,

    /// Number of distinct stored words
    word_count: usize,

    /// Configuration options
    config: PrefixTreeConfig,
}

impl PrefixTree {
    /// Creates a new empty `PrefixTree` that lowercases inserted words.
    pub fn new() -> Self {
        Self::with_config(PrefixTreeConfig::default())
    }

    /// Creates a new empty `PrefixTree` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the tree.
    pub fn with_config(config: PrefixTreeConfig) -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            word_count: 0,
            config,
        }
    }

    /// Whether inserted words are currently lowercased.
    pub fn case_fold(&self) -> bool {
        self.config.case_fold
    }

    /// Changes the folding policy for future insertions.
    ///
    /// Words already in the tree keep the form they were stored with.
    pub fn set_case_fold(&mut self, enabled: bool) -> &mut Self {
        self.config.case_fold = enabled;
        self
    }

    /// Inserts a word into the tree.
    ///
    /// The word is lowercased first when case folding is enabled. If a word
    /// already ends at the target node, the stored form is kept and this call
    /// does nothing. Passing `None` is a no-op; the empty string is stored
    /// on the root.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert, or `None`.
    ///
    /// # Returns
    ///
    /// The tree itself, for chaining.
    pub fn insert<'a, W>(&mut self, word: W) -> &mut Self
    where
        W: Into<Option<&'a str>>,
    {
        let Some(word) = word.into() else {
            return self;
        };

        let word = if self.config.case_fold {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        };

        let mut node = NodeId::ROOT;
        for c in word.chars() {
            node = self.child_or_insert(node, c);
        }

        let slot = &mut self.nodes[node.index()].word;
        if slot.is_none() {
            *slot = Some(word.into_owned());
            self.word_count += 1;
        }

        self
    }

    /// Inserts every word of `words`, in order.
    ///
    /// # Arguments
    ///
    /// * `words` - Words to insert; `None` items are skipped.
    ///
    /// # Returns
    ///
    /// The tree itself, for chaining.
    pub fn insert_all<'a, I>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Option<&'a str>>,
    {
        for word in words {
            self.insert(word);
        }
        self
    }

    /// Checks whether exactly `word` was stored.
    ///
    /// No folding is applied to `word`: with case folding enabled at insertion
    /// time, only the lowercased form is found.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to look up, or `None`.
    ///
    /// # Returns
    ///
    /// `true` if the path for `word` exists and ends at a node whose stored
    /// word equals `word`; `false` otherwise, including for `None`.
    pub fn contains<'a, W>(&self, word: W) -> bool
    where
        W: Into<Option<&'a str>>,
    {
        let Some(word) = word.into() else {
            return false;
        };

        self.find(word)
            .and_then(|id| self.nodes[id.index()].word.as_deref())
            .is_some_and(|stored| stored == word)
    }

    /// Collects every stored word that starts with `prefix`.
    ///
    /// The words are returned in depth-first pre-order: the word stored at the
    /// prefix node itself comes first, then each child's subtree in the order
    /// the child's character was first inserted. No folding is applied to
    /// `prefix`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The matching words, empty if none start with `prefix`.
    /// * `Err(PrefixTreeError::InvalidArgument)` - If `prefix` is `None`.
    pub fn match_prefix<'a, P>(&self, prefix: P) -> PrefixTreeResult<Vec<String>>
    where
        P: Into<Option<&'a str>>,
    {
        let prefix = prefix.into().ok_or_else(|| {
            PrefixTreeError::InvalidArgument("prefix cannot be absent".to_string())
        })?;

        Ok(self
            .find(prefix)
            .map(|start| self.collect_words(start))
            .unwrap_or_default())
    }

    /// Every stored word, in the same order as `match_prefix("")`.
    pub fn words(&self) -> Vec<String> {
        self.collect_words(NodeId::ROOT)
    }

    /// Removes every word and node, leaving a fresh empty root.
    ///
    /// The folding policy is left unchanged.
    pub fn clear(&mut self) -> &mut Self {
        tracing::debug!(
            words = self.word_count,
            nodes = self.nodes.len(),
            "Clearing prefix tree"
        );

        self.nodes = vec![TrieNode::new()];
        self.word_count = 0;
        self
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follows `key` from the root, returning the node it ends at.
    fn find(&self, key: &str) -> Option<NodeId> {
        key.chars()
            .try_fold(NodeId::ROOT, |node, c| self.nodes[node.index()].children.get(c))
    }

    fn child_or_insert(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(child) = self.nodes[parent.index()].children.get(c) {
            return child;
        }

        let child = NodeId::new(self.nodes.len());
        self.nodes.push(TrieNode::new());
        let inserted = self.nodes[parent.index()].children.insert(c, child);
        debug_assert!(inserted, "edge {c:?} already present");
        child
    }

    /// Pre-order walk of the subtree under `start` using an explicit stack.
    fn collect_words(&self, start: NodeId) -> Vec<String> {
        let mut words = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.index()];
            if let Some(word) = &node.word {
                words.push(word.clone());
            }
            // Reversed so the first-inserted child is popped next
            stack.extend(node.children.iter().rev().map(|(_, child)| child));
        }

        words
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extend<&'a str> for PrefixTree {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a> FromIterator<&'a str> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
