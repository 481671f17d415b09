// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `mnist-tensor inspect` command: display IDX header fields.

use mnist_data::{read_header, DatasetConfig, RecordKind};
use std::path::PathBuf;

pub fn execute(
    images: Option<PathBuf>,
    labels: Option<PathBuf>,
    config: Option<&DatasetConfig>,
) -> anyhow::Result<()> {
    let images = images.or_else(|| config.map(|c| c.images_path.clone()));
    let labels = super::resolve_labels(labels, config);

    if images.is_none() && labels.is_none() {
        anyhow::bail!("nothing to inspect: pass --images and/or --labels, or a --config file");
    }

    if let Some(path) = images {
        let header = read_header(&path, RecordKind::Images)
            .map_err(|e| anyhow::anyhow!("failed to inspect '{}': {e}", path.display()))?;
        println!("Images File Header: {}", path.display());
        println!("  Magic Number:     {}", header.magic);
        println!("  Number of Images: {}", header.count);
        println!("  Rows: {}, Columns: {}", header.rows, header.cols);
        println!();
    }

    if let Some(path) = labels {
        let header = read_header(&path, RecordKind::Labels)
            .map_err(|e| anyhow::anyhow!("failed to inspect '{}': {e}", path.display()))?;
        println!("Labels File Header: {}", path.display());
        println!("  Magic Number:     {}", header.magic);
        println!("  Number of Labels: {}", header.count);
        println!();
    }

    Ok(())
}
