// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word-list loading and match rendering.
//!
//! A word list is line-oriented text. Every line is split on single spaces
//! and the pieces are inserted in order, so the tree's enumeration order
//! follows the order words first appear in the text.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_structures::prefix_tree::PrefixTree;
use crate::error::AppResult;

/// Word list shipped with the binary.
pub const BUNDLED_WORDS: &str = include_str!("../data/lorem_ipsum.txt");

/// Reads every line of `reader` into `tree`.
///
/// # Returns
///
/// The number of lines read.
pub fn load_words<R: BufRead>(tree: &mut PrefixTree, reader: R) -> AppResult<usize> {
    let mut lines = 0;
    for line in reader.lines() {
        tree.insert_all(line?.split(' '));
        lines += 1;
    }

    tracing::debug!(lines, words = tree.len(), "Word list loaded");
    Ok(lines)
}

/// Opens `path` and loads it with [`load_words`].
pub fn load_words_from_path(tree: &mut PrefixTree, path: &Path) -> AppResult<usize> {
    tracing::info!(path = %path.display(), "Loading word list");
    let file = fs::File::open(path)?;
    load_words(tree, BufReader::new(file))
}

/// Loads [`BUNDLED_WORDS`].
pub fn load_bundled_words(tree: &mut PrefixTree) -> AppResult<usize> {
    load_words(tree, BUNDLED_WORDS.as_bytes())
}

/// Renders a match as `[prefix]rest`.
///
/// `word` is expected to start with `prefix`; otherwise the whole word is
/// shown after the bracket.
pub fn format_match(prefix: &str, word: &str) -> String {
    let rest = word.strip_prefix(prefix).unwrap_or(word);
    format!("[{prefix}]{rest}")
}

/// Renders the full report block for one prefix query.
pub fn format_report(prefix: &str, words: &[String]) -> String {
    let mut report = format!("{} words starting with \"{}\":\n", words.len(), prefix);
    for word in words {
        report.push_str("    ");
        report.push_str(&format_match(prefix, word));
        report.push('\n');
    }
    report
}
