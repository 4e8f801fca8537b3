//! Test utilities and fixtures for Spellbook.
//!
//! This module provides reusable fixtures and proptest strategies shared by
//! the crate-level test modules.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use std::path::PathBuf;
use tempfile::TempDir;

/// Word list shaped like the tiny frequency list the CLI loads by default.
pub const TINY_WORD_LIST: &str = "\
bicycle 4.2
bike 7.5
shoe 1.0
shoes 2.0
cat 12.0
catalog 3.1
catch 8.8
cattle 5.0
Japan 5123.122
";

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a strategy for lowercase words of 1 to `max_length` letters.
pub fn word_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::range('a', 'e'), 1..=max_length)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for finite, non-negative frequencies.
pub fn frequency_strategy() -> BoxedStrategy<f64> {
    (0u32..1_000_000)
        .prop_map(|n| f64::from(n) / 1000.0)
        .boxed()
}

/// Test fixture holding a temporary directory for word lists and config files.
///
/// Environment variables set through the fixture are removed when it drops.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write the tiny word list and return its path.
    pub fn tiny_word_list(&self) -> std::io::Result<PathBuf> {
        self.write_file("tiny_frequency.txt", TINY_WORD_LIST)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
