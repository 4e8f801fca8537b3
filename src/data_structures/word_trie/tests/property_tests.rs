// Copyright (c) 2025 Spellbook Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the word trie.

use proptest::prelude::*;
use std::collections::HashMap;

use super::assert_well_formed;
use crate::data_structures::word_trie::WordTrie;

// Short words over a small alphabet so paths overlap often
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{1,6}").unwrap()
}

fn frequency_strategy() -> impl Strategy<Value = f64> {
    (0u32..100_000).prop_map(|n| f64::from(n) / 100.0)
}

fn entries_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec((word_strategy(), frequency_strategy()), 0..40)
}

proptest! {
    // Property: every inserted word is found with the last frequency written for it
    #[test]
    fn prop_insert_then_find(entries in entries_strategy()) {
        let mut trie = WordTrie::new();
        let mut expected = HashMap::new();
        for (word, frequency) in &entries {
            trie.insert(word, *frequency).unwrap();
            expected.insert(word.clone(), *frequency);
        }

        prop_assert_eq!(trie.len(), expected.len());
        prop_assert_eq!(trie.all_words().len(), expected.len());
        for (word, frequency) in &expected {
            prop_assert_eq!(trie.find_word(word).unwrap().frequency(), Some(*frequency));
        }
        assert_well_formed(&trie);
    }

    // Property: removals never leave dead nodes and only drop the removed word
    #[test]
    fn prop_remove_prunes_and_keeps_others(
        entries in entries_strategy(),
        removals in prop::collection::vec(word_strategy(), 0..20),
    ) {
        let mut trie = WordTrie::new();
        let mut expected = HashMap::new();
        for (word, frequency) in &entries {
            trie.insert(word, *frequency).unwrap();
            expected.insert(word.clone(), *frequency);
        }

        for word in &removals {
            match expected.remove(word) {
                Some(frequency) => {
                    prop_assert_eq!(trie.remove(word).unwrap(), frequency);
                }
                None => {
                    let before = trie.all_words();
                    prop_assert!(trie.remove(word).unwrap_err().is_not_found());
                    prop_assert_eq!(trie.all_words(), before);
                }
            }
            assert_well_formed(&trie);
        }

        let mut remaining: Vec<_> = trie.all_words().into_iter().map(|(w, _)| w).collect();
        remaining.sort();
        let mut wanted: Vec<_> = expected.keys().cloned().collect();
        wanted.sort();
        prop_assert_eq!(remaining, wanted);
    }

    // Property: prefix results are exactly the stored words starting with the prefix
    #[test]
    fn prop_find_prefix_matches_filter(entries in entries_strategy(), prefix in word_strategy()) {
        let mut trie = WordTrie::new();
        for (word, frequency) in &entries {
            trie.insert(word, *frequency).unwrap();
        }

        let mut wanted: Vec<String> = trie
            .all_words()
            .into_iter()
            .map(|(w, _)| w)
            .filter(|w| w.starts_with(&prefix))
            .collect();
        wanted.sort();

        match trie.find_prefix(&prefix) {
            Ok(found) => {
                let mut found: Vec<String> = found.into_iter().map(|(w, _)| w).collect();
                found.sort();
                prop_assert_eq!(found, wanted);
            }
            Err(err) => {
                prop_assert!(err.is_not_found());
                prop_assert!(wanted.is_empty());
            }
        }
    }
}
