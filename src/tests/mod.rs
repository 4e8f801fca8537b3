//! Test modules for Spellbook.
//!
//! This module contains the crate-level tests that cut across components:
//! - Configuration loading and validation
//! - Error types and reporting
//! - The dictionary service over real word list files
//!
//! Data structure tests live next to the data structures themselves.

pub mod test_utils;

pub use test_utils::{frequency_strategy, word_strategy, TestFixture};
