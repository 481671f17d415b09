// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `mnist-tensor export` command: write one image to the tensor text format.

use mnist_data::{image_from_batch, load_images, DatasetConfig};
use std::path::PathBuf;
use tensor_core::write_tensor;

pub fn execute(
    images: Option<PathBuf>,
    index: usize,
    output: PathBuf,
    config: Option<&DatasetConfig>,
) -> anyhow::Result<()> {
    let images_path = super::resolve_images(images, config)?;

    let batch = load_images(&images_path, Some(index + 1))?;
    let image = image_from_batch(&batch, index)
        .map_err(|e| anyhow::anyhow!("cannot export record {index}: {e}"))?;

    write_tensor(&image, &output)?;
    tracing::info!("wrote record {index} to '{}'", output.display());

    println!(
        "Exported record {index} (shape {}) to {}",
        image.shape(),
        output.display()
    );
    Ok(())
}
