// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Numeric component bound for tensor storage.

use std::fmt;
use std::str::FromStr;

/// Bound for the numeric types a [`crate::Tensor`] can hold.
///
/// Implemented for the primitive integer and floating-point types only;
/// rank, shape, and equality semantics are identical across all of them.
/// The `Display`/`FromStr` bounds are what the text file format writes and
/// parses, and `Default` is the zero value used for zero-initialization and
/// short-file tails.
pub trait Element:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Send
    + Sync
    + 'static
{
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(impl Element for $ty {})*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize);
impl_element!(u8, u16, u32, u64, u128, usize);
impl_element!(f32, f64);
