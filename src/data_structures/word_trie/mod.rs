// Copyright (c) 2025 Spellbook Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Trie Implementation
//!
//! This module provides a character trie storing words together with a
//! frequency weight. It supports exact lookup, prefix collection, full
//! enumeration, and removal that prunes branches no longer leading to a word.
//!
//! # Representation
//!
//! Nodes are kept in an arena and addressed by [`NodeId`]. Each node owns the
//! edge map to its children and records the index of its parent, so pruning
//! can walk upwards without any shared ownership between nodes.
//!
//! # Example
//!
//! ```
//! use spellbook_lib::data_structures::word_trie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.insert("bicycle", 4.2).unwrap();
//! trie.insert("shoe", 1.0).unwrap();
//!
//! assert_eq!(trie.find_word("bicycle").unwrap().frequency(), Some(4.2));
//! assert!(trie.find_word("boot").unwrap_err().is_not_found());
//!
//! trie.remove("bicycle").unwrap();
//! assert_eq!(trie.all_words(), vec![("shoe".to_string(), 1.0)]);
//! ```
//!
//! # Concurrency
//!
//! The trie has no internal locking. Mutations take `&mut self`; callers that
//! share one trie between threads must serialize access themselves.

mod error;
mod node;

#[cfg(test)]
mod tests;

pub use error::{TrieError, TrieErrorKind};
pub use node::{NodeId, TrieNode};

/// Result type for word trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// A stored word paired with its frequency.
pub type WordFrequency = (String, f64);

/// Character trie mapping words to frequencies.
///
/// Key features:
/// * Exact lookup distinguishing stored words from mere path prefixes
/// * Prefix collection in a deterministic order (pre-order, children by insertion)
/// * Removal with upward pruning of dead branches
/// * Fresh result lists per query, no retained scratch state
#[derive(Debug, Clone)]
pub struct WordTrie {
    /// Node arena; slot 0 is always the root
    nodes: Vec<Option<TrieNode>>,

    /// Freed arena slots available for reuse
    free: Vec<usize>,

    /// Number of stored words
    word_count: usize,
}

impl WordTrie {
    /// Creates a new empty `WordTrie`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(TrieNode::root())],
            free: Vec::new(),
            word_count: 0,
        }
    }

    /// Inserts a word with its frequency.
    ///
    /// Missing nodes along the path are created. Inserting a word that is
    /// already stored replaces its frequency.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    /// * `frequency` - The weight to associate with the word.
    ///
    /// # Returns
    ///
    /// * `Ok(&TrieNode)` - The node for the last symbol of the word.
    /// * `Err(TrieError::EmptyWord)` - If `word` is empty. The trie is untouched.
    pub fn insert<W>(&mut self, word: W, frequency: f64) -> TrieResult<&TrieNode>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let mut current = NodeId::ROOT;
        for symbol in word.chars() {
            current = match self.node_at(current).child(symbol) {
                Some(next) => next,
                None => self.attach(current, symbol),
            };
        }

        let was_word = self
            .node_at_mut(current)
            .frequency
            .replace(frequency)
            .is_some();
        if !was_word {
            self.word_count += 1;
        }

        Ok(self.node_at(current))
    }

    /// Looks up a stored word.
    ///
    /// A node existing on the path is not enough: the final node must end a word.
    ///
    /// # Returns
    ///
    /// * `Ok(&TrieNode)` - The terminal node, exposing the word's frequency.
    /// * `Err(TrieError::EmptyWord)` - If `word` is empty.
    /// * `Err(TrieError::WordNotFound)` - If the word is not stored.
    pub fn find_word<W>(&self, word: W) -> TrieResult<&TrieNode>
    where
        W: AsRef<str>,
    {
        let (id, _) = self.locate_word(word.as_ref())?;
        Ok(self.node_at(id))
    }

    /// Retrieves the frequency of a stored word.
    ///
    /// Fails exactly like [`find_word`](Self::find_word).
    pub fn get<W>(&self, word: W) -> TrieResult<f64>
    where
        W: AsRef<str>,
    {
        let (_, frequency) = self.locate_word(word.as_ref())?;
        Ok(frequency)
    }

    /// Checks if a word is stored. Empty words are never stored.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.locate_word(word.as_ref()).is_ok()
    }

    /// Collects every word at or below the node for `prefix`.
    ///
    /// The prefix itself is included when it is a stored word. Results come in
    /// pre-order with children visited in insertion order.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<WordFrequency>)` - All completions; empty if the path exists but
    ///   no word lies below it.
    /// * `Err(TrieError::EmptyWord)` - If `prefix` is empty.
    /// * `Err(TrieError::PrefixNotFound)` - If no path for `prefix` exists.
    pub fn find_prefix<P>(&self, prefix: P) -> TrieResult<Vec<WordFrequency>>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let start = self
            .descend(prefix)
            .ok_or_else(|| TrieError::PrefixNotFound(prefix.to_string()))?;

        let mut words = Vec::new();
        let mut buffer = prefix.to_string();
        self.collect_words(start, &mut buffer, &mut words);
        Ok(words)
    }

    /// Returns every stored word with its frequency.
    ///
    /// The order follows the trie layout and carries no guarantee; sort the
    /// result when a stable presentation order is needed.
    pub fn all_words(&self) -> Vec<WordFrequency> {
        let mut words = Vec::with_capacity(self.word_count);
        self.collect_words(NodeId::ROOT, &mut String::new(), &mut words);
        words
    }

    /// Removes a stored word.
    ///
    /// If the word's node still leads to longer words, only its word-end mark
    /// is cleared. Otherwise the node is detached and every ancestor left
    /// without children or a word of its own is detached too, up to the root.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` - The frequency the removed word carried.
    /// * `Err(TrieError::EmptyWord)` - If `word` is empty.
    /// * `Err(TrieError::WordNotFound)` - If the word is not stored. The trie is untouched.
    pub fn remove<W>(&mut self, word: W) -> TrieResult<f64>
    where
        W: AsRef<str>,
    {
        let (id, frequency) = self.locate_word(word.as_ref())?;

        let node = self.node_at_mut(id);
        node.frequency = None;
        let has_children = node.has_children();
        self.word_count -= 1;

        if !has_children {
            self.prune_upwards(id);
        }

        Ok(frequency)
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        self.node_at(NodeId::ROOT)
    }

    /// Returns the node with the given id, if it is live.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Removes every word, leaving only the root.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Walks from the root along `symbols`, returning the node reached.
    fn descend(&self, symbols: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for symbol in symbols.chars() {
            current = self.node_at(current).child(symbol)?;
        }
        Some(current)
    }

    /// Resolves a stored word to its node and frequency.
    fn locate_word(&self, word: &str) -> TrieResult<(NodeId, f64)> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        if let Some(id) = self.descend(word) {
            if let Some(frequency) = self.node_at(id).frequency {
                return Ok((id, frequency));
            }
        }
        Err(TrieError::WordNotFound(word.to_string()))
    }

    /// Depth-first collection of words below `id`; `buffer` spells the path to `id`.
    fn collect_words(&self, id: NodeId, buffer: &mut String, words: &mut Vec<WordFrequency>) {
        let node = self.node_at(id);
        if let Some(frequency) = node.frequency {
            words.push((buffer.clone(), frequency));
        }

        for (symbol, child) in node.children() {
            buffer.push(symbol);
            self.collect_words(child, buffer, words);
            buffer.pop();
        }
    }

    /// Creates a child for `symbol` under `parent` and returns its id.
    fn attach(&mut self, parent: NodeId, symbol: char) -> NodeId {
        let id = match self.free.pop() {
            Some(index) => NodeId(index),
            None => {
                self.nodes.push(None);
                NodeId(self.nodes.len() - 1)
            }
        };

        self.nodes[id.0] = Some(TrieNode::new(id, symbol, parent));
        self.node_at_mut(parent).children.insert(symbol, id);
        id
    }

    /// Unlinks a non-root node from its parent and frees its slot.
    ///
    /// Returns the parent id. The root is never detached.
    fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        if id == NodeId::ROOT {
            return None;
        }

        let node = self.nodes.get_mut(id.0)?.take()?;
        self.free.push(id.0);

        let parent = node.parent?;
        if let Some(symbol) = node.symbol {
            self.node_at_mut(parent).children.shift_remove(&symbol);
        }
        Some(parent)
    }

    /// Detaches `start` and its ancestors while they are dead.
    ///
    /// Stops at the root or at the first node that ends a word or still has children.
    fn prune_upwards(&mut self, start: NodeId) {
        let mut current = start;
        while current != NodeId::ROOT && self.node_at(current).is_dead() {
            match self.detach(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }

    fn node_at(&self, id: NodeId) -> &TrieNode {
        match self.nodes.get(id.0) {
            Some(Some(node)) => node,
            _ => unreachable!("trie edge points at freed slot {}", id.0),
        }
    }

    fn node_at_mut(&mut self, id: NodeId) -> &mut TrieNode {
        match self.nodes.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => unreachable!("trie edge points at freed slot {}", id.0),
        }
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}
