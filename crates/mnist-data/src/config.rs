// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Dataset configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! images_path = "./dataset/train-images.idx3-ubyte"
//! labels_path = "./dataset/train-labels.idx1-ubyte"
//! limit = 1000
//! ```

use crate::DatasetError;
use std::path::{Path, PathBuf};

/// Default locations for the CLI when no config or flags are given.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DatasetConfig {
    /// Path to the IDX image file (`.gz` accepted).
    pub images_path: PathBuf,
    /// Path to the IDX label file (`.gz` accepted).
    pub labels_path: PathBuf,
    /// Optional cap on the number of records to load.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl DatasetConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DatasetError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, DatasetError> {
        toml::from_str(toml_str)
            .map_err(|e| DatasetError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, DatasetError> {
        toml::to_string_pretty(self)
            .map_err(|e| DatasetError::Config(format!("TOML serialise error: {e}")))
    }
}
