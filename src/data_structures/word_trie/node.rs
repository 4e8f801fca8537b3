// Copyright (c) 2025 Spellbook Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the word trie.
//!
//! Nodes live in the trie's arena and refer to each other by [`NodeId`].
//! A node owns the edges to its children; its parent link is a plain index
//! used only to walk upwards while pruning.

use indexmap::IndexMap;

/// Stable index of a node inside a [`WordTrie`](super::WordTrie) arena.
///
/// Ids are only valid until the node is removed; freed slots are reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Id of the root node of every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the word trie.
///
/// Each non-root node represents one symbol of a word. Word-end nodes carry the
/// frequency of the word spelled by the path from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct TrieNode {
    /// Arena slot this node occupies
    pub(crate) id: NodeId,

    /// Symbol on the edge leading to this node (`None` for the root)
    pub(crate) symbol: Option<char>,

    /// Arena slot of the parent (`None` for the root)
    pub(crate) parent: Option<NodeId>,

    /// Child edges in insertion order
    pub(crate) children: IndexMap<char, NodeId>,

    /// Frequency of the word ending here, if any
    pub(crate) frequency: Option<f64>,
}

impl TrieNode {
    /// Creates the root node.
    pub(crate) fn root() -> Self {
        Self {
            id: NodeId::ROOT,
            symbol: None,
            parent: None,
            children: IndexMap::new(),
            frequency: None,
        }
    }

    /// Creates a non-word node for `symbol` below `parent`.
    pub(crate) fn new(id: NodeId, symbol: char, parent: NodeId) -> Self {
        Self {
            id,
            symbol: Some(symbol),
            parent: Some(parent),
            children: IndexMap::new(),
            frequency: None,
        }
    }

    /// Returns the arena id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the symbol this node represents, `None` for the root.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Returns the id of the parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns `true` if this node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if the path to this node spells a stored word.
    pub fn is_word(&self) -> bool {
        self.frequency.is_some()
    }

    /// Returns the stored frequency if this node ends a word.
    pub fn frequency(&self) -> Option<f64> {
        self.frequency
    }

    /// Returns the child reached by `symbol`.
    pub fn child(&self, symbol: char) -> Option<NodeId> {
        self.children.get(&symbol).copied()
    }

    /// Iterates over child edges in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&symbol, &id)| (symbol, id))
    }

    /// Returns the number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// A node that neither ends a word nor leads to one.
    pub(crate) fn is_dead(&self) -> bool {
        !self.is_word() && !self.has_children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_dead() {
        let node = TrieNode::new(NodeId(1), 'a', NodeId::ROOT);
        assert!(!node.is_word());
        assert!(!node.has_children());
        assert!(node.is_dead());
        assert_eq!(node.symbol(), Some('a'));
        assert_eq!(node.parent(), Some(NodeId::ROOT));
    }

    #[test]
    fn test_word_end_carries_frequency() {
        let mut node = TrieNode::new(NodeId(1), 'a', NodeId::ROOT);
        node.frequency = Some(2.5);
        assert!(node.is_word());
        assert_eq!(node.frequency(), Some(2.5));
        assert!(!node.is_dead());
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut node = TrieNode::root();
        node.children.insert('z', NodeId(1));
        node.children.insert('a', NodeId(2));
        node.children.insert('m', NodeId(3));

        let symbols: Vec<char> = node.children().map(|(c, _)| c).collect();
        assert_eq!(symbols, vec!['z', 'a', 'm']);
        assert_eq!(node.child('a'), Some(NodeId(2)));
        assert_eq!(node.child('q'), None);
        assert_eq!(node.child_count(), 3);
    }
}
