// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for dataset loading and rendering.

use std::path::PathBuf;
use tensor_core::TensorError;

/// Errors that can occur when working with MNIST IDX files.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A dataset file could not be opened or read.
    #[error("i/o failure on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The magic number does not match the expected record kind.
    #[error("'{path}' is not an IDX {kind} file: expected magic {expected}, found {found}")]
    BadMagic {
        path: PathBuf,
        kind: &'static str,
        expected: u32,
        found: u32,
    },

    /// The file ended before record `record` was fully read.
    #[error("'{path}' truncated at record {record}: {source}")]
    Truncated {
        path: PathBuf,
        record: usize,
        #[source]
        source: std::io::Error,
    },

    /// Image and label files disagree on the record count.
    #[error("image/label count mismatch: {images} images vs {labels} labels")]
    CountMismatch { images: usize, labels: usize },

    /// A label byte is outside the ten MNIST classes.
    #[error("'{path}' record {record} has invalid label {value} (classes are 0..=9)")]
    InvalidLabel {
        path: PathBuf,
        record: usize,
        value: u8,
    },

    /// A record index is past the end of the loaded dataset.
    #[error("record index {index} out of range: dataset holds {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    /// The tensor handed to the renderer is not a 2-D image.
    #[error("expected a rank-2 image tensor, got rank {rank}")]
    NotAnImage { rank: usize },

    /// The dataset configuration file is unreadable or invalid.
    #[error("config error: {0}")]
    Config(String),

    /// An underlying tensor operation failed.
    #[error(transparent)]
    Tensor(#[from] TensorError),
}
