// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # mnist-data
//!
//! MNIST IDX dataset glue around `tensor-core`.
//!
//! The IDX files store big-endian binary records: a magic number (2051 for
//! images, 2049 for labels), a record count, and — for images only — the row
//! and column extents, followed by raw `u8` payload. This crate parses that
//! format and hands the rest of the pipeline plain tensors:
//!
//! - [`read_header`] — header fields of an image or label file.
//! - [`load_images`] — pixel data as a `[n, rows, cols]` `Tensor<f64>`,
//!   normalized to `[0, 1]`.
//! - [`load_labels`] — one-hot `[n, 10]` `Tensor<f64>` plus the raw class
//!   bytes.
//! - [`MnistDataset`] — both halves loaded together with a count check.
//! - [`render_ascii`] — a terminal preview of one image tensor.
//! - [`DatasetConfig`] — TOML-backed default paths for the CLI.
//!
//! Files ending in `.gz` are decompressed transparently.

mod config;
mod display;
mod error;
mod idx;
mod loader;

pub use config::DatasetConfig;
pub use display::render_ascii;
pub use error::DatasetError;
pub use idx::{read_header, IdxHeader, RecordKind, IMAGE_MAGIC, LABEL_MAGIC};
pub use loader::{image_from_batch, load_images, load_labels, MnistDataset, NUM_CLASSES};
