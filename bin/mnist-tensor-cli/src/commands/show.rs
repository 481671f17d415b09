// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `mnist-tensor show` command: render one image as ASCII art.

use mnist_data::{image_from_batch, load_images, load_labels, render_ascii, DatasetConfig};
use std::path::PathBuf;

pub fn execute(
    images: Option<PathBuf>,
    labels: Option<PathBuf>,
    index: usize,
    config: Option<&DatasetConfig>,
) -> anyhow::Result<()> {
    let images_path = super::resolve_images(images, config)?;
    let labels_path = super::resolve_labels(labels, config);

    // Only records 0..=index are needed, so cap the load there.
    let batch = load_images(&images_path, Some(index + 1))?;
    let image = image_from_batch(&batch, index)
        .map_err(|e| anyhow::anyhow!("cannot show record {index}: {e}"))?;

    if let Some(labels_path) = labels_path {
        let (_, raw) = load_labels(&labels_path, Some(index + 1))?;
        match raw.get(index) {
            Some(label) => println!("Record {index} (label: {label}):"),
            None => anyhow::bail!(
                "label file '{}' has no record {index}",
                labels_path.display()
            ),
        }
    } else {
        println!("Record {index}:");
    }

    print!("{}", render_ascii(&image)?);
    Ok(())
}
