// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The line-oriented tensor text format.
//!
//! One plain decimal value per line, nothing else:
//!
//! ```text
//! <rank>
//! <shape[0]>
//! ...
//! <shape[rank-1]>
//! <data[0]>
//! ...
//! <data[num_elements-1]>
//! ```
//!
//! Data lines follow the component type's own textual representation, so the
//! same format carries integer and floating-point tensors. A rank-0 tensor is
//! a `0` rank line followed by exactly one data line.
//!
//! # Round-trip contract
//! `write_tensor` followed by `read_tensor` reproduces the original tensor
//! exactly when the line counts match. On read, a file with fewer data lines
//! than elements leaves the unassigned tail at zero, and lines beyond the
//! element count are ignored. Header lines that fail to parse are a hard
//! [`TensorError::Malformed`] — only the data tail is lenient.

use crate::{Element, Shape, Tensor, TensorError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Writes `tensor` to `path` in the text format, truncating any existing
/// file.
///
/// The handle is flushed and closed before returning, on success and on
/// every error path.
pub fn write_tensor<T: Element>(tensor: &Tensor<T>, path: impl AsRef<Path>) -> Result<(), TensorError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", tensor.rank()).map_err(|e| io_error(path, e))?;
    for &dim in tensor.shape().dims() {
        writeln!(out, "{dim}").map_err(|e| io_error(path, e))?;
    }
    for value in tensor.as_slice() {
        writeln!(out, "{value}").map_err(|e| io_error(path, e))?;
    }
    out.flush().map_err(|e| io_error(path, e))
}

/// Reads a tensor from the text format at `path`.
///
/// The rank and shape lines must parse as non-negative integers; the
/// resulting tensor is zero-filled and then populated from the data lines in
/// flat-index order. See the module docs for the short-file leniency rules.
pub fn read_tensor<T: Element>(path: impl AsRef<Path>) -> Result<Tensor<T>, TensorError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut lines = BufReader::new(file).lines();
    let mut line_no = 0usize;

    let rank_line = match lines.next() {
        Some(line) => {
            line_no += 1;
            line.map_err(|e| io_error(path, e))?
        }
        None => return Err(malformed(path, 1, "missing rank line")),
    };
    let rank = parse_header(&rank_line)
        .ok_or_else(|| malformed(path, line_no, format!("expected rank, got '{}'", rank_line.trim())))?;

    let mut dims = Vec::with_capacity(rank);
    for axis in 0..rank {
        let line = match lines.next() {
            Some(line) => {
                line_no += 1;
                line.map_err(|e| io_error(path, e))?
            }
            None => {
                return Err(malformed(
                    path,
                    line_no + 1,
                    format!("missing extent for axis {axis}"),
                ))
            }
        };
        let dim = parse_header(&line).ok_or_else(|| {
            malformed(path, line_no, format!("expected axis extent, got '{}'", line.trim()))
        })?;
        dims.push(dim);
    }

    let mut tensor = Tensor::<T>::zeros(Shape::new(dims));
    for slot in tensor.as_mut_slice() {
        let line = match lines.next() {
            Some(line) => {
                line_no += 1;
                line.map_err(|e| io_error(path, e))?
            }
            // Short file: the remaining elements keep their zero value.
            None => break,
        };
        *slot = line.trim().parse::<T>().map_err(|_| {
            malformed(path, line_no, format!("unparseable element '{}'", line.trim()))
        })?;
    }

    // Any lines past num_elements() are ignored.
    Ok(tensor)
}

/// Header lines (rank and axis extents) are non-negative integers.
fn parse_header(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

fn io_error(path: &Path, source: std::io::Error) -> TensorError {
    TensorError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn malformed(path: &Path, line: usize, detail: impl Into<String>) -> TensorError {
    TensorError::Malformed {
        path: path.to_path_buf(),
        line,
        detail: detail.into(),
    }
}
