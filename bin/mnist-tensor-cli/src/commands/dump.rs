// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `mnist-tensor dump` command: print a tensor text file.
//!
//! Reads elements as `f64`, which round-trips every file this tool writes.

use std::path::PathBuf;
use tensor_core::read_tensor;

pub fn execute(input: PathBuf) -> anyhow::Result<()> {
    let tensor = read_tensor::<f64>(&input)?;

    println!("Tensor: {}", input.display());
    println!("  Rank:     {}", tensor.rank());
    println!("  Shape:    {}", tensor.shape());
    println!("  Elements: {}", tensor.num_elements());
    println!();
    println!("{tensor}");
    Ok(())
}
