//! Search configuration module.
//!
//! This module defines the limits applied to prefix searches: how many letters
//! a prefix needs before it is searched and how many suggestions come back.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Minimum number of letters in a prefix search
    pub min_prefix_len: usize,

    /// Maximum number of suggestions returned for a prefix
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_prefix_len: 3,
            max_suggestions: 10,
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.min_prefix_len == 0 {
            return Err(ConfigError::ValidationError(
                "min_prefix_len must be greater than 0".to_string(),
            ));
        }

        if self.max_suggestions == 0 {
            return Err(ConfigError::ValidationError(
                "max_suggestions must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
