// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod dump;
pub mod export;
pub mod inspect;
pub mod show;

use mnist_data::DatasetConfig;
use std::path::PathBuf;

/// Initializes tracing from the `-v` repeat count.
///
/// `RUST_LOG` takes precedence when set, so `-v` is only the default filter.
pub fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Resolves the image file path from the CLI flag or the config file.
pub fn resolve_images(
    flag: Option<PathBuf>,
    config: Option<&DatasetConfig>,
) -> anyhow::Result<PathBuf> {
    flag.or_else(|| config.map(|c| c.images_path.clone()))
        .ok_or_else(|| anyhow::anyhow!("no image file: pass --images or a --config file"))
}

/// Resolves the label file path from the CLI flag or the config file.
///
/// Labels are optional for most commands, so absence is not an error here.
pub fn resolve_labels(
    flag: Option<PathBuf>,
    config: Option<&DatasetConfig>,
) -> Option<PathBuf> {
    flag.or_else(|| config.map(|c| c.labels_path.clone()))
}
