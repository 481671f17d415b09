// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # mnist-tensor
//!
//! Command-line front end for the tensor-core text format and the MNIST IDX
//! dataset files.
//!
//! ## Usage
//! ```bash
//! # Inspect IDX headers
//! mnist-tensor inspect --images ./dataset/train-images.idx3-ubyte.gz
//!
//! # Render image 7 as ASCII art with its label
//! mnist-tensor show --images train-images.idx3-ubyte --labels train-labels.idx1-ubyte -n 7
//!
//! # Export image 7 to the tensor text format, then print it back
//! mnist-tensor export --images train-images.idx3-ubyte -n 7 --output seven.tensor
//! mnist-tensor dump --input seven.tensor
//! ```
//!
//! Dataset paths may also come from a TOML config file (`--config`), in
//! which case the per-command flags are optional overrides.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mnist-tensor",
    about = "MNIST IDX inspector and tensor text-file tool",
    version,
    author
)]
struct Cli {
    /// Path to a TOML dataset configuration file (supplies default paths).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the IDX header fields of image and/or label files.
    Inspect {
        /// Path to the IDX image file.
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Path to the IDX label file.
        #[arg(short, long)]
        labels: Option<PathBuf>,
    },

    /// Render one image as ASCII art, with its label when available.
    Show {
        /// Path to the IDX image file.
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Path to the IDX label file.
        #[arg(short, long)]
        labels: Option<PathBuf>,

        /// Zero-based record index.
        #[arg(short = 'n', long, default_value_t = 0)]
        index: usize,
    },

    /// Write one image to a tensor text file.
    Export {
        /// Path to the IDX image file.
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Zero-based record index.
        #[arg(short = 'n', long, default_value_t = 0)]
        index: usize,

        /// Destination tensor text file (truncated if present).
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Read a tensor text file and print its contents.
    Dump {
        /// Source tensor text file.
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = cli
        .config
        .as_deref()
        .map(mnist_data::DatasetConfig::from_file)
        .transpose()?;

    match cli.command {
        Commands::Inspect { images, labels } => {
            commands::inspect::execute(images, labels, config.as_ref())
        }
        Commands::Show {
            images,
            labels,
            index,
        } => commands::show::execute(images, labels, index, config.as_ref()),
        Commands::Export {
            images,
            index,
            output,
        } => commands::export::execute(images, index, output, config.as_ref()),
        Commands::Dump { input } => commands::dump::execute(input),
    }
}
