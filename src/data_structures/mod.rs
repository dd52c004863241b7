//! Data structures for the prefix tree application.

pub mod prefix_tree;

// Re-export common data structures
pub use prefix_tree::{PrefixTree, PrefixTreeConfig, PrefixTreeError, PrefixTreeResult};
