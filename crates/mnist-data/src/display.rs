// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Terminal rendering of image tensors.

use crate::DatasetError;
use tensor_core::Tensor;

/// Renders a 2-D image tensor as ASCII art, one glyph per pixel.
///
/// Expects normalized intensities in `[0, 1]` as produced by
/// [`crate::load_images`]; the five-step ramp maps brighter pixels to denser
/// glyphs. Elements are read through the bounds-checked coordinate accessor
/// against the tensor's declared shape.
pub fn render_ascii(image: &Tensor<f64>) -> Result<String, DatasetError> {
    let dims = image.shape().dims();
    let [rows, cols] = *dims else {
        return Err(DatasetError::NotAnImage { rank: dims.len() });
    };

    let mut out = String::with_capacity((cols + 1) * rows);
    for r in 0..rows {
        for c in 0..cols {
            let pixel = *image.at(&[r, c])? * 255.0;
            out.push(glyph(pixel));
        }
        out.push('\n');
    }
    Ok(out)
}

fn glyph(pixel: f64) -> char {
    if pixel > 200.0 {
        '@'
    } else if pixel > 150.0 {
        '#'
    } else if pixel > 100.0 {
        '8'
    } else if pixel > 50.0 {
        ':'
    } else {
        '.'
    }
}
