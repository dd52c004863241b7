//! Prefix Tree Library
//!
//! This library contains the prefix tree itself, plus the pieces the
//! `prefix_tree` binary is built from: layered configuration, error types and
//! word-list loading.
//!
//! The tree is the only stateful component. Everything else is a thin caller
//! of its public operations.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod word_list;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{PrefixTree, PrefixTreeConfig, PrefixTreeError, PrefixTreeResult};

/// Version information for the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
