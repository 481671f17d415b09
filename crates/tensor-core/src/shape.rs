// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor shape descriptors and dimension utilities.

use std::fmt;

/// The dimension descriptor of a [`crate::Tensor`].
///
/// A shape is an ordered sequence of axis extents; its length is the rank.
/// The empty sequence is the rank-0 (scalar) shape, which still addresses
/// exactly one element — the empty product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a shape from the given axis extents.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::Shape;
    /// let s = Shape::new(vec![2, 3, 4]);
    /// assert_eq!(s.rank(), 3);
    /// assert_eq!(s.num_elements(), 24);
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// The rank-0 (scalar) shape.
    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    /// A 1-D shape.
    pub fn vector(len: usize) -> Self {
        Self { dims: vec![len] }
    }

    /// A 2-D shape.
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            dims: vec![rows, cols],
        }
    }

    /// Number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of addressable elements: the product of all extents,
    /// which is 1 for the scalar shape and 0 when any axis has extent 0.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// The axis extents as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The extent of one axis, or `None` past the rank.
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.dims.get(axis).copied()
    }

    /// Row-major (C-order) strides: `stride[rank-1] == 1` and
    /// `stride[i] == stride[i+1] * dims[i+1]`, so the last axis varies
    /// fastest in the flat buffer.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = Vec::with_capacity(self.dims.len());
        let mut step = 1;
        for &extent in self.dims.iter().rev() {
            strides.push(step);
            step *= extent;
        }
        strides.reverse();
        strides
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.dims.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

/// Convenience: `Shape::from(vec![2, 3])`.
impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self::new(dims)
    }
}

/// Convenience: `Shape::from(&[2, 3][..])`.
impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}
