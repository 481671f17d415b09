// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The core tensor container.

use crate::{Element, Shape, TensorError};
use std::fmt;
use std::mem;

/// An owned, dense, n-dimensional tensor stored in contiguous memory.
///
/// `Tensor` couples a [`Shape`] with one flat buffer in row-major (C) order:
/// the last dimension varies fastest. The structural invariant
/// `data.len() == shape.num_elements()` holds for every live instance,
/// including the source of a [`take`](Tensor::take).
///
/// Element access comes in two distinct flavours:
/// - [`at`](Tensor::at) / [`at_mut`](Tensor::at_mut) — coordinate-based,
///   rank- and bounds-checked. The default entry point.
/// - [`flat_at`](Tensor::flat_at) / [`flat_at_mut`](Tensor::flat_at_mut) —
///   linear indexing that bypasses the coordinate-bounds proof. Intended
///   only for serialization and for collaborators that already reason about
///   the contiguous layout (e.g. slicing one image out of a batch buffer).
///
/// # Examples
/// ```
/// use tensor_core::Tensor;
///
/// let mut t = Tensor::<f64>::zeros(vec![2, 3]);
/// *t.at_mut(&[1, 2]).unwrap() = 5.0;
/// assert_eq!(*t.flat_at(5).unwrap(), 5.0); // row-major: 1*3 + 2
/// ```
#[derive(Debug, Clone)]
pub struct Tensor<T: Element> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Element> Tensor<T> {
    /// Creates a tensor of the given shape with every element zeroed.
    ///
    /// A rank-0 (scalar) shape yields exactly one element.
    pub fn zeros(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        let data = vec![T::default(); shape.num_elements()];
        Self { shape, data }
    }

    /// Creates a tensor of the given shape with every element set to `value`.
    pub fn filled(shape: impl Into<Shape>, value: T) -> Self {
        let shape = shape.into();
        let data = vec![value; shape.num_elements()];
        Self { shape, data }
    }

    /// Creates a tensor from an existing flat buffer.
    ///
    /// Returns [`TensorError::LengthMismatch`] if the buffer length does not
    /// equal the shape's element count.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::Tensor;
    /// let t = Tensor::from_vec(vec![2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(*t.at(&[1, 0]).unwrap(), 3);
    /// ```
    pub fn from_vec(shape: impl Into<Shape>, data: Vec<T>) -> Result<Self, TensorError> {
        let shape = shape.into();
        let expected = shape.num_elements();
        if data.len() != expected {
            return Err(TensorError::LengthMismatch {
                shape,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the number of stored elements.
    ///
    /// Always equals `self.shape().num_elements()`.
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// Returns a reference to the element at the given coordinates.
    ///
    /// The coordinate vector must have exactly `rank()` components
    /// ([`TensorError::RankMismatch`] otherwise), each strictly smaller than
    /// its axis extent ([`TensorError::OutOfBounds`] otherwise). Runs in
    /// O(rank), independent of the element count.
    pub fn at(&self, coords: &[usize]) -> Result<&T, TensorError> {
        let offset = self.offset(coords)?;
        Ok(&self.data[offset])
    }

    /// Returns a mutable reference to the element at the given coordinates.
    ///
    /// Same contract as [`at`](Tensor::at).
    pub fn at_mut(&mut self, coords: &[usize]) -> Result<&mut T, TensorError> {
        let offset = self.offset(coords)?;
        Ok(&mut self.data[offset])
    }

    /// Returns a reference to the element at flat (linear) index `index`.
    ///
    /// This bypasses coordinate bounds checking entirely; the only check is
    /// `index < num_elements()`. Use it for serialization and trusted bulk
    /// access over the contiguous buffer, not as a general accessor.
    pub fn flat_at(&self, index: usize) -> Result<&T, TensorError> {
        self.data.get(index).ok_or(TensorError::FlatOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Returns a mutable reference to the element at flat index `index`.
    ///
    /// Same contract as [`flat_at`](Tensor::flat_at).
    pub fn flat_at_mut(&mut self, index: usize) -> Result<&mut T, TensorError> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(TensorError::FlatOutOfBounds { index, len })
    }

    /// Returns the flat buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the flat buffer mutably, for bulk fills by trusted callers.
    ///
    /// The shape cannot be changed through this, so the structural invariant
    /// is preserved.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Moves this tensor's storage out, leaving the source in the canonical
    /// empty state: rank 0 with a single zero element.
    ///
    /// The source stays fully usable afterwards — every query and accessor
    /// keeps working on the scalar-zero state, so the structural invariant
    /// holds at every point of the tensor's lifetime.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::Tensor;
    /// let mut a = Tensor::<i32>::filled(vec![4], 7);
    /// let b = a.take();
    /// assert_eq!(b.num_elements(), 4);
    /// assert_eq!(a.rank(), 0);
    /// assert_eq!(a.num_elements(), 1);
    /// ```
    pub fn take(&mut self) -> Tensor<T> {
        mem::take(self)
    }

    /// Maps coordinates to the row-major flat offset, validating rank and
    /// every axis bound along the way.
    fn offset(&self, coords: &[usize]) -> Result<usize, TensorError> {
        let dims = self.shape.dims();
        if coords.len() != dims.len() {
            return Err(TensorError::RankMismatch {
                expected: dims.len(),
                got: coords.len(),
            });
        }
        for (axis, (&index, &extent)) in coords.iter().zip(dims).enumerate() {
            if index >= extent {
                return Err(TensorError::OutOfBounds {
                    axis,
                    index,
                    extent,
                });
            }
        }
        // index = sum(coords[i] * stride[i]), accumulating the stride from
        // the fastest-varying axis outwards.
        let mut offset = 0;
        let mut stride = 1;
        for axis in (0..dims.len()).rev() {
            offset += coords[axis] * stride;
            stride *= dims[axis];
        }
        Ok(offset)
    }
}

/// The canonical empty tensor: rank 0, one zero element.
impl<T: Element> Default for Tensor<T> {
    fn default() -> Self {
        Self::zeros(Shape::scalar())
    }
}

/// Tensors are equal iff their shapes match axis for axis and every
/// corresponding element in the flat buffers compares equal.
///
/// Only tensors of the same component type are comparable; there is no
/// implicit numeric coercion.
impl<T: Element> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

/// Debug-friendly rendering: rank-2 tensors print as a row/column grid,
/// everything else as shape plus the flat buffer.
impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [rows, cols] = *self.shape.dims() {
            for r in 0..rows {
                for c in 0..cols {
                    if c > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", self.data[r * cols + c])?;
                }
                writeln!(f)?;
            }
            Ok(())
        } else {
            writeln!(f, "shape: {}", self.shape)?;
            write!(f, "data: {:?}", self.data)
        }
    }
}
