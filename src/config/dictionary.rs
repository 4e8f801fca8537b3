//! Dictionary configuration module.
//!
//! This module defines where the word list is read from.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default word list, one `word frequency` pair per line.
pub const DEFAULT_WORD_LIST: &str = "tiny_frequency.txt";

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DictionaryConfig {
    /// Path to the word list loaded at startup
    pub word_list: PathBuf,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_list: PathBuf::from(DEFAULT_WORD_LIST),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.word_list.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "word_list cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
