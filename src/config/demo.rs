// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word-list matching configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Settings for the word-list matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Word list to load; the bundled lorem ipsum text when unset
    pub words: Option<PathBuf>,

    /// Prefixes to query, in order
    pub prefixes: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            words: None,
            prefixes: vec!["l".to_string(), "lo".to_string(), "al".to_string()],
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prefixes.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one prefix must be configured".to_string(),
            ));
        }

        if let Some(path) = &self.words {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "word list path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
