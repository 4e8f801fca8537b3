// Copyright (c) 2025 Spellbook Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the word trie.

mod property_tests;

use super::{NodeId, WordTrie};

/// Walks the whole trie and checks its structural invariants.
///
/// Every reachable node links back to its parent under the right symbol, no
/// non-root node is dead, the cached word count matches, and no live arena
/// slot is unreachable.
pub(super) fn assert_well_formed(trie: &WordTrie) {
    let mut stack = vec![NodeId::ROOT];
    let mut reachable = 0;
    let mut words = 0;

    while let Some(id) = stack.pop() {
        let node = trie.node(id).expect("reachable node must be live");
        reachable += 1;
        if node.is_word() {
            words += 1;
        }
        if id != NodeId::ROOT {
            assert!(
                !node.is_dead(),
                "dead node {:?} ({:?}) left in trie",
                id,
                node.symbol()
            );
        }

        for (symbol, child_id) in node.children() {
            let child = trie.node(child_id).expect("child must be live");
            assert_eq!(child.parent(), Some(id));
            assert_eq!(child.symbol(), Some(symbol));
            stack.push(child_id);
        }
    }

    assert!(trie.root().frequency().is_none());
    assert_eq!(words, trie.len());
    assert_eq!(reachable, trie.node_count());
}
