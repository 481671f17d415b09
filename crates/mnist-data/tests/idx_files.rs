// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: synthetic IDX files through the full loader path.

use flate2::write::GzEncoder;
use flate2::Compression;
use mnist_data::{
    load_images, load_labels, render_ascii, DatasetError, MnistDataset, IMAGE_MAGIC, LABEL_MAGIC,
};
use std::io::Write;
use std::path::{Path, PathBuf};

// ── Helpers ────────────────────────────────────────────────────

/// Builds an IDX image file holding `pixels.len()` images of `rows` x `cols`.
fn image_file_bytes(rows: u32, cols: u32, pixels: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&IMAGE_MAGIC.to_be_bytes());
    bytes.extend_from_slice(&(pixels.len() as u32).to_be_bytes());
    bytes.extend_from_slice(&rows.to_be_bytes());
    bytes.extend_from_slice(&cols.to_be_bytes());
    for image in pixels {
        assert_eq!(image.len(), (rows * cols) as usize);
        bytes.extend_from_slice(image);
    }
    bytes
}

fn label_file_bytes(labels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&LABEL_MAGIC.to_be_bytes());
    bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
    bytes.extend_from_slice(labels);
    bytes
}

fn write_plain(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn write_gz(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();
    path
}

// ── Tests ──────────────────────────────────────────────────────

#[test]
fn load_images_normalizes_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_plain(
        dir.path(),
        "images.idx3-ubyte",
        &image_file_bytes(2, 2, &[vec![0, 51, 204, 255]]),
    );

    let images = load_images(&path, None).unwrap();
    assert_eq!(images.shape().dims(), &[1, 2, 2]);
    assert_eq!(
        images.as_slice(),
        &[0.0, 51.0 / 255.0, 204.0 / 255.0, 1.0]
    );
}

#[test]
fn load_images_respects_limit() {
    let dir = tempfile::tempdir().unwrap();
    let pixels: Vec<Vec<u8>> = (0..5).map(|i| vec![i as u8; 4]).collect();
    let path = write_plain(
        dir.path(),
        "images.idx3-ubyte",
        &image_file_bytes(2, 2, &pixels),
    );

    let images = load_images(&path, Some(2)).unwrap();
    assert_eq!(images.shape().dims(), &[2, 2, 2]);
}

#[test]
fn load_labels_one_hot() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_plain(dir.path(), "labels.idx1-ubyte", &label_file_bytes(&[3, 0, 9]));

    let (one_hot, raw) = load_labels(&path, None).unwrap();
    assert_eq!(raw, vec![3, 0, 9]);
    assert_eq!(one_hot.shape().dims(), &[3, 10]);
    assert_eq!(*one_hot.at(&[0, 3]).unwrap(), 1.0);
    assert_eq!(*one_hot.at(&[1, 0]).unwrap(), 1.0);
    assert_eq!(*one_hot.at(&[2, 9]).unwrap(), 1.0);
    assert_eq!(one_hot.as_slice().iter().sum::<f64>(), 3.0);
}

#[test]
fn load_labels_rejects_out_of_range_class() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_plain(dir.path(), "labels.idx1-ubyte", &label_file_bytes(&[2, 11]));

    let err = load_labels(&path, None).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::InvalidLabel {
            record: 1,
            value: 11,
            ..
        }
    ));
}

#[test]
fn truncated_image_payload_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = image_file_bytes(2, 2, &[vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
    bytes.truncate(bytes.len() - 2); // cut into the second record
    let path = write_plain(dir.path(), "images.idx3-ubyte", &bytes);

    let err = load_images(&path, None).unwrap_err();
    assert!(matches!(err, DatasetError::Truncated { record: 1, .. }));
}

#[test]
fn gzipped_files_load_transparently() {
    let dir = tempfile::tempdir().unwrap();
    let images = write_gz(
        dir.path(),
        "images.idx3-ubyte.gz",
        &image_file_bytes(1, 2, &[vec![255, 0], vec![0, 255]]),
    );
    let labels = write_gz(dir.path(), "labels.idx1-ubyte.gz", &label_file_bytes(&[7, 1]));

    let dataset = MnistDataset::load(&images, &labels, None).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.label(0).unwrap(), 7);
    assert_eq!(*dataset.labels_one_hot().at(&[0, 7]).unwrap(), 1.0);
    assert_eq!(*dataset.image(0).unwrap().at(&[0, 0]).unwrap(), 1.0);
}

#[test]
fn count_mismatch_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let images = write_plain(
        dir.path(),
        "images.idx3-ubyte",
        &image_file_bytes(1, 1, &[vec![0], vec![1]]),
    );
    let labels = write_plain(dir.path(), "labels.idx1-ubyte", &label_file_bytes(&[5]));

    let err = MnistDataset::load(&images, &labels, None).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::CountMismatch {
            images: 2,
            labels: 1,
        }
    ));
}

#[test]
fn dataset_image_renders() {
    let dir = tempfile::tempdir().unwrap();
    let images = write_plain(
        dir.path(),
        "images.idx3-ubyte",
        &image_file_bytes(2, 2, &[vec![0, 255, 255, 0]]),
    );
    let labels = write_plain(dir.path(), "labels.idx1-ubyte", &label_file_bytes(&[4]));

    let dataset = MnistDataset::load(&images, &labels, None).unwrap();
    let art = render_ascii(&dataset.image(0).unwrap()).unwrap();
    assert_eq!(art, ".@\n@.\n");
}
