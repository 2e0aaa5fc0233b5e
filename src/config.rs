// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::GenError;
use crate::seq::stats::RemovalMode;

pub const CONFIG_FILE_NAME: &str = ".randfastaconfig";

/// Defaults read from `.randfastaconfig` (JSON). Command-line options take precedence.
///
/// ```json
/// { "seed": 42, "removal": "inserted" }
/// ```
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub removal: Option<RemovalMode>,
}

impl GenConfig {
    pub fn from_file(path: &Path) -> Result<GenConfig, GenError> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| GenError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<GenConfig, GenError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// `$HOME/.randfastaconfig` if present, else `./.randfastaconfig` if present.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
