//! Data structures for the Spellbook engine.
//!
//! This module contains the trie that stores the dictionary and the stable
//! sort used to present its contents. Both are synchronous and hold no locks:
//! - No unsafe code
//! - Each query returns its own result list
//! - Deterministic traversal and sort order

pub mod stable_sort;
pub mod word_trie;

// Re-export common data structures
pub use stable_sort::{merge, merge_sort, merge_sort_by};
pub use word_trie::{
    NodeId, TrieError, TrieErrorKind, TrieNode, TrieResult, WordFrequency, WordTrie,
};
