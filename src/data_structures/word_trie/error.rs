// Copyright (c) 2025 Spellbook Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the word trie.
//!
//! Every failure falls into one of two kinds: the caller passed an argument the
//! trie never accepts, or the requested word or prefix path is absent. A miss is
//! an expected outcome and is reported distinctly from a successful empty result.

/// Broad classification of a [`TrieError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrieErrorKind {
    /// The operation was invoked with a structurally disallowed argument.
    InvalidInput,
    /// The requested word or prefix path does not exist.
    NotFound,
}

/// Errors that can occur in word trie operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrieError {
    /// An empty word or prefix was provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// A prefix is shorter than the minimum the caller enforces.
    #[error("Prefix '{prefix}' is shorter than the minimum of {min_len} letters")]
    PrefixTooShort {
        /// The rejected prefix.
        prefix: String,
        /// The minimum number of symbols required.
        min_len: usize,
    },

    /// The word is not stored in the trie.
    #[error("Word not found: {0}")]
    WordNotFound(String),

    /// No path for the prefix exists in the trie.
    #[error("No words start with prefix: {0}")]
    PrefixNotFound(String),
}

impl TrieError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> TrieErrorKind {
        match self {
            Self::EmptyWord | Self::PrefixTooShort { .. } => TrieErrorKind::InvalidInput,
            Self::WordNotFound(_) | Self::PrefixNotFound(_) => TrieErrorKind::NotFound,
        }
    }

    /// Returns `true` if the error reports a missing word or prefix.
    pub fn is_not_found(&self) -> bool {
        self.kind() == TrieErrorKind::NotFound
    }

    /// Returns `true` if the error reports a disallowed argument.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == TrieErrorKind::InvalidInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrieError::EmptyWord;
        assert_eq!(err.to_string(), "Empty word not allowed");

        let err = TrieError::PrefixTooShort {
            prefix: "ab".to_string(),
            min_len: 3,
        };
        assert_eq!(
            err.to_string(),
            "Prefix 'ab' is shorter than the minimum of 3 letters"
        );

        let err = TrieError::WordNotFound("boot".to_string());
        assert_eq!(err.to_string(), "Word not found: boot");

        let err = TrieError::PrefixNotFound("xyz".to_string());
        assert_eq!(err.to_string(), "No words start with prefix: xyz");
    }

    #[test]
    fn test_error_kinds() {
        assert!(TrieError::EmptyWord.is_invalid_input());
        assert!(TrieError::PrefixTooShort {
            prefix: "a".to_string(),
            min_len: 3
        }
        .is_invalid_input());
        assert!(TrieError::WordNotFound("a".to_string()).is_not_found());
        assert!(TrieError::PrefixNotFound("a".to_string()).is_not_found());
        assert!(!TrieError::EmptyWord.is_not_found());
    }
}
