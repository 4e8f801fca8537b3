//! Spellbook Library
//!
//! This library contains the core components of Spellbook: a character trie
//! storing words with frequency weights, the stable merge sort used to list
//! them, and the dictionary service that loads word lists and answers
//! spell-check and prefix-suggestion queries.
//!
//! # Architecture
//!
//! - [`data_structures`]: the word trie and the stable sort, synchronous and lock-free
//! - [`dictionary`]: word list loading, ranking, and the `SpellChecker` service
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: application-level error types and reporting

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Spellbook.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
