// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the prefix tree.

use crate::data_structures::prefix_tree::{PrefixTree, PrefixTreeConfig};
use crate::tests::test_utils::{word_strategy, words_strategy};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Build a tree from `words` with the given folding policy
fn build_tree(words: &[String], case_fold: bool) -> PrefixTree {
    let mut tree = PrefixTree::with_config(PrefixTreeConfig { case_fold });
    tree.insert_all(words.iter().map(String::as_str));
    tree
}

/// The form a word is stored in
fn stored_form(word: &str, case_fold: bool) -> String {
    if case_fold {
        word.to_lowercase()
    } else {
        word.to_string()
    }
}

/// Every char-boundary prefix of `word`, from "" to `word` itself
fn prefixes_of(word: &str) -> Vec<&str> {
    word.char_indices()
        .map(|(i, _)| &word[..i])
        .chain(std::iter::once(word))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every inserted word is found in its stored form
    #[test]
    fn proptest_insert_then_contains(words in words_strategy(), case_fold in any::<bool>()) {
        let tree = build_tree(&words, case_fold);

        for word in &words {
            prop_assert!(tree.contains(stored_form(word, case_fold).as_str()));
        }
    }

    /// The tree behaves like a set of stored forms
    #[test]
    fn proptest_matches_set_model(words in words_strategy(), case_fold in any::<bool>()) {
        let tree = build_tree(&words, case_fold);
        let model: BTreeSet<String> = words.iter().map(|w| stored_form(w, case_fold)).collect();

        prop_assert_eq!(tree.len(), model.len());

        let all = tree.match_prefix("").unwrap();
        prop_assert_eq!(all.len(), model.len());
        prop_assert_eq!(all.iter().cloned().collect::<BTreeSet<_>>(), model);
    }

    /// Inserting the same list twice changes nothing
    #[test]
    fn proptest_repeated_insert_is_idempotent(words in words_strategy()) {
        let mut tree = build_tree(&words, true);
        let before = tree.words();
        let nodes = tree.node_count();

        tree.insert_all(words.iter().map(String::as_str));

        prop_assert_eq!(tree.words(), before);
        prop_assert_eq!(tree.node_count(), nodes);
    }

    /// A word is returned for every one of its prefixes
    #[test]
    fn proptest_prefix_containment(words in words_strategy(), case_fold in any::<bool>()) {
        let tree = build_tree(&words, case_fold);

        for word in &words {
            let stored = stored_form(word, case_fold);
            for prefix in prefixes_of(&stored) {
                let matches = tree.match_prefix(prefix).unwrap();
                prop_assert!(matches.contains(&stored), "{:?} missing for prefix {:?}", stored, prefix);
            }
        }
    }

    /// Results are exactly the stored words starting with the prefix
    #[test]
    fn proptest_results_start_with_prefix(words in words_strategy(), prefix in word_strategy(3)) {
        let tree = build_tree(&words, false);
        let matches = tree.match_prefix(prefix.as_str()).unwrap();

        prop_assert!(matches.iter().all(|m| m.starts_with(&prefix)));

        let expected: BTreeSet<&String> = words.iter().filter(|w| w.starts_with(&prefix)).collect();
        prop_assert_eq!(matches.len(), expected.len());
        if expected.is_empty() {
            prop_assert!(matches.is_empty());
        }
    }

    /// A node's own word comes before the words below it
    #[test]
    fn proptest_pre_order(words in words_strategy()) {
        let tree = build_tree(&words, true);
        let all = tree.words();

        for (i, word) in all.iter().enumerate() {
            for longer in &all[..i] {
                prop_assert!(
                    !longer.starts_with(word.as_str()) || longer == word,
                    "{:?} listed before its prefix {:?}", longer, word
                );
            }
        }
    }

    /// Repeated queries give identical results
    #[test]
    fn proptest_order_determinism(words in words_strategy(), prefix in word_strategy(2)) {
        let tree = build_tree(&words, true);
        let first = tree.match_prefix(prefix.as_str()).unwrap();
        let second = tree.match_prefix(prefix.as_str()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Nothing survives a clear
    #[test]
    fn proptest_clear(words in words_strategy(), case_fold in any::<bool>()) {
        let mut tree = build_tree(&words, case_fold);
        tree.clear();

        prop_assert!(tree.is_empty());
        prop_assert!(tree.match_prefix("").unwrap().is_empty());
        for word in &words {
            prop_assert!(!tree.contains(stored_form(word, case_fold).as_str()));
            prop_assert!(tree.match_prefix(word.as_str()).unwrap().is_empty());
        }
    }
}

#[test]
fn test_scenario_from_fruit_list() {
    let mut tree = PrefixTree::new();
    tree.insert_all(["apple", "app", "apply", "banana"]);

    assert_eq!(tree.match_prefix("app").unwrap(), vec!["app", "apple", "apply"]);
    assert_eq!(tree.match_prefix("ban").unwrap(), vec!["banana"]);
    assert!(tree.match_prefix("z").unwrap().is_empty());
    assert!(!tree.contains("App"));
    assert!(tree.contains("app"));
}

#[test]
fn test_children_follow_first_seen_character() {
    let mut tree = PrefixTree::new();
    tree.insert_all(["car", "cat", "cab", "ca", "cart"]);

    // 'r' was seen first under "ca", then 't', then 'b'
    assert_eq!(
        tree.match_prefix("ca").unwrap(),
        vec!["ca", "car", "cart", "cat", "cab"]
    );
}
