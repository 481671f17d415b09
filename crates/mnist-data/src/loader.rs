// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Dataset loading into tensors.
//!
//! Pixel intensities are normalized from `u8` to `f64` in `[0, 1]`; labels
//! are expanded to one-hot rows over the ten digit classes. Both loaders
//! accept an optional record limit so a caller that only wants image `n`
//! does not pull the full 60k training set through the decoder.

use crate::idx::{self, RecordKind};
use crate::DatasetError;
use std::io::Read;
use std::path::Path;
use tensor_core::Tensor;

/// Number of MNIST digit classes.
pub const NUM_CLASSES: usize = 10;

/// Loads image records from `path` into a `[n, rows, cols]` tensor.
///
/// `n` is the header count, capped by `limit` when given. Pixels are scaled
/// to `[0, 1]` by `value / 255`.
pub fn load_images(
    path: impl AsRef<Path>,
    limit: Option<usize>,
) -> Result<Tensor<f64>, DatasetError> {
    let path = path.as_ref();
    let mut reader = idx::open(path)?;
    let header = idx::read_header_from(&mut reader, path, RecordKind::Images)?;

    let count = capped(header.count, limit);
    tracing::info!(
        "loading {count} of {} images ({}x{}) from '{}'",
        header.count,
        header.rows,
        header.cols,
        path.display(),
    );

    let image_size = header.rows * header.cols;
    let mut images = Tensor::zeros(vec![count, header.rows, header.cols]);
    let pixels = images.as_mut_slice();
    let mut record = vec![0u8; image_size];

    for i in 0..count {
        reader
            .read_exact(&mut record)
            .map_err(|e| DatasetError::Truncated {
                path: path.to_path_buf(),
                record: i,
                source: e,
            })?;
        let row = &mut pixels[i * image_size..(i + 1) * image_size];
        for (dst, &px) in row.iter_mut().zip(&record) {
            *dst = f64::from(px) / 255.0;
        }
    }

    Ok(images)
}

/// Loads label records from `path`.
///
/// Returns the one-hot `[n, 10]` tensor alongside the raw class bytes, `n`
/// capped by `limit` when given.
pub fn load_labels(
    path: impl AsRef<Path>,
    limit: Option<usize>,
) -> Result<(Tensor<f64>, Vec<u8>), DatasetError> {
    let path = path.as_ref();
    let mut reader = idx::open(path)?;
    let header = idx::read_header_from(&mut reader, path, RecordKind::Labels)?;

    let count = capped(header.count, limit);
    tracing::info!(
        "loading {count} of {} labels from '{}'",
        header.count,
        path.display(),
    );

    let mut raw = vec![0u8; count];
    reader
        .read_exact(&mut raw)
        .map_err(|e| DatasetError::Truncated {
            path: path.to_path_buf(),
            record: count,
            source: e,
        })?;

    let mut one_hot = Tensor::zeros(vec![count, NUM_CLASSES]);
    let slots = one_hot.as_mut_slice();
    for (i, &label) in raw.iter().enumerate() {
        let class = usize::from(label);
        if class >= NUM_CLASSES {
            return Err(DatasetError::InvalidLabel {
                path: path.to_path_buf(),
                record: i,
                value: label,
            });
        }
        slots[i * NUM_CLASSES + class] = 1.0;
    }

    Ok((one_hot, raw))
}

/// Copies record `index` out of a `[n, rows, cols]` batch tensor as a
/// standalone `[rows, cols]` tensor.
///
/// The batch buffer is contiguous, so one record is exactly the
/// `rows * cols` flat slice starting at `index * rows * cols` — the linear
/// reinterpretation the flat-access escape hatch exists for.
pub fn image_from_batch(images: &Tensor<f64>, index: usize) -> Result<Tensor<f64>, DatasetError> {
    let dims = images.shape().dims();
    let [n, rows, cols] = *dims else {
        return Err(DatasetError::NotAnImage { rank: dims.len() });
    };
    if index >= n {
        return Err(DatasetError::IndexOutOfRange { index, len: n });
    }

    let image_size = rows * cols;
    let start = index * image_size;
    let record = images.as_slice()[start..start + image_size].to_vec();
    Ok(Tensor::from_vec(vec![rows, cols], record)?)
}

/// An images + labels pair loaded from matching IDX files.
#[derive(Debug)]
pub struct MnistDataset {
    images: Tensor<f64>,
    labels_one_hot: Tensor<f64>,
    labels: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl MnistDataset {
    /// Loads both halves of the dataset and checks the record counts agree.
    pub fn load(
        images_path: impl AsRef<Path>,
        labels_path: impl AsRef<Path>,
        limit: Option<usize>,
    ) -> Result<Self, DatasetError> {
        let images = load_images(images_path, limit)?;
        let (labels_one_hot, labels) = load_labels(labels_path, limit)?;

        let image_count = images.shape().dim(0).unwrap_or(0);
        if image_count != labels.len() {
            return Err(DatasetError::CountMismatch {
                images: image_count,
                labels: labels.len(),
            });
        }

        let rows = images.shape().dim(1).unwrap_or(0);
        let cols = images.shape().dim(2).unwrap_or(0);
        Ok(Self {
            images,
            labels_one_hot,
            labels,
            rows,
            cols,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Image height in pixels.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Image width in pixels.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The full `[n, rows, cols]` image batch.
    pub fn images(&self) -> &Tensor<f64> {
        &self.images
    }

    /// The one-hot `[n, 10]` label tensor.
    pub fn labels_one_hot(&self) -> &Tensor<f64> {
        &self.labels_one_hot
    }

    /// Record `index` as a standalone `[rows, cols]` tensor.
    pub fn image(&self, index: usize) -> Result<Tensor<f64>, DatasetError> {
        image_from_batch(&self.images, index)
    }

    /// The class of record `index`.
    pub fn label(&self, index: usize) -> Result<u8, DatasetError> {
        self.labels
            .get(index)
            .copied()
            .ok_or(DatasetError::IndexOutOfRange {
                index,
                len: self.labels.len(),
            })
    }
}

fn capped(count: usize, limit: Option<usize>) -> usize {
    match limit {
        Some(limit) => count.min(limit),
        None => count,
    }
}
