//! Dictionary error module.
//!
//! This module defines error types raised while loading word lists into the
//! trie, querying them, and writing them back out.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::TrieError;

/// Errors that can occur during dictionary operations.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when a word list cannot be opened, read or written.
    #[error("Word list I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a line does not have a word followed by a frequency.
    #[error("Malformed line {line}: expected 'word frequency', got '{content}'")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// Error when the frequency field is not a finite number.
    #[error("Invalid frequency on line {line}: '{value}'")]
    InvalidFrequency {
        /// 1-based line number
        line: usize,
        /// The frequency field as written
        value: String,
    },

    /// Error when an entry could not be written back as a word list line.
    #[error("Invalid entry '{word}': {reason}")]
    InvalidEntry {
        /// The rejected word
        word: String,
        /// What makes it unwritable
        reason: String,
    },

    /// Error when a word list holds no entries.
    #[error("Word list is empty: {0}")]
    EmptyWordList(PathBuf),

    /// Error raised by the underlying trie.
    #[error(transparent)]
    Trie(#[from] TrieError),
}

impl DictionaryError {
    /// Returns `true` if the error is a missing word or prefix.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Trie(err) if err.is_not_found())
    }
}
