// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor access and serialization.

use crate::Shape;
use std::path::PathBuf;

/// Errors that can occur when constructing, indexing, or serializing tensors.
///
/// All failures surface synchronously at the call site; nothing is logged
/// and suppressed inside this crate. Callers decide whether to abort,
/// report, or substitute a default.
#[derive(Debug, thiserror::Error)]
pub enum TensorError {
    /// A coordinate vector's length does not equal the tensor's rank.
    #[error("coordinate rank mismatch: tensor has rank {expected}, got {got} coordinates")]
    RankMismatch { expected: usize, got: usize },

    /// A coordinate component is not smaller than its axis extent.
    #[error("coordinate out of bounds: axis {axis} has extent {extent}, got index {index}")]
    OutOfBounds {
        axis: usize,
        index: usize,
        extent: usize,
    },

    /// A flat index is not smaller than the element count.
    #[error("flat index out of bounds: tensor has {len} elements, got index {index}")]
    FlatOutOfBounds { index: usize, len: usize },

    /// The provided buffer length does not match the shape's element count.
    #[error("buffer length mismatch: shape {shape} holds {expected} elements, got {got}")]
    LengthMismatch {
        shape: Shape,
        expected: usize,
        got: usize,
    },

    /// A file could not be opened, read, or written.
    #[error("i/o failure on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tensor file line could not be parsed as the expected value.
    #[error("malformed tensor file '{path}' at line {line}: {detail}")]
    Malformed {
        path: PathBuf,
        line: usize,
        detail: String,
    },
}
