// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! A dense, contiguous n-dimensional tensor container with a line-oriented
//! text file format.
//!
//! This crate provides:
//! - [`Tensor`] — a generic, runtime-rank tensor backed by one flat `Vec<T>`.
//! - [`Shape`] — the dimension descriptor (rank, element count, strides).
//! - [`Element`] — the numeric bound for storable component types.
//! - [`read_tensor`] / [`write_tensor`] — the persisted text format.
//!
//! # Design Goals
//! - One invariant everywhere: `data.len() == shape.num_elements()` holds
//!   for every live tensor, including a moved-from one (see [`Tensor::take`]).
//! - Bounds-checked coordinate access as the default entry point; flat
//!   indexing as a clearly separate escape hatch for serialization and bulk
//!   buffer reinterpretation.
//! - Clean error types via `thiserror`; no panics in library paths.
//!
//! Everything here is synchronous and single-threaded by design. A tensor is
//! plain owned data — share it across threads only behind external
//! synchronization or as independent clones.

mod element;
mod error;
mod io;
mod shape;
mod tensor;

pub use element::Element;
pub use error::TensorError;
pub use io::{read_tensor, write_tensor};
pub use shape::Shape;
pub use tensor::Tensor;
