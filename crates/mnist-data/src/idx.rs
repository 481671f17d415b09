// Copyright (c) 2025 mnist-tensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! IDX binary header parsing.
//!
//! Every header field is a 4-byte big-endian unsigned integer. Image files
//! (`magic 2051`) carry count, rows, and cols; label files (`magic 2049`)
//! carry only the count.

use crate::DatasetError;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic number of an IDX image file.
pub const IMAGE_MAGIC: u32 = 2051;

/// Magic number of an IDX label file.
pub const LABEL_MAGIC: u32 = 2049;

/// Which kind of IDX record a file is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Images,
    Labels,
}

impl RecordKind {
    /// The magic number this kind of file must start with.
    pub fn expected_magic(self) -> u32 {
        match self {
            RecordKind::Images => IMAGE_MAGIC,
            RecordKind::Labels => LABEL_MAGIC,
        }
    }

    /// Human-readable label for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Images => "image",
            RecordKind::Labels => "label",
        }
    }
}

/// Parsed IDX header fields.
///
/// `rows` and `cols` are zero for label files, which carry no dimension
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdxHeader {
    pub magic: u32,
    pub count: usize,
    pub rows: usize,
    pub cols: usize,
}

/// Reads and validates the header of the IDX file at `path`.
pub fn read_header(path: impl AsRef<Path>, kind: RecordKind) -> Result<IdxHeader, DatasetError> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    read_header_from(&mut reader, path, kind)
}

/// Opens `path`, decompressing transparently when it ends in `.gz`.
///
/// Gzip streams cannot seek, so callers read the header and payload off the
/// same reader in one pass.
pub(crate) fn open(path: &Path) -> Result<Box<dyn Read>, DatasetError> {
    let file = File::open(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Reads the header fields off an already-open reader.
pub(crate) fn read_header_from(
    reader: &mut dyn Read,
    path: &Path,
    kind: RecordKind,
) -> Result<IdxHeader, DatasetError> {
    let magic = read_u32_be(reader, path)?;
    if magic != kind.expected_magic() {
        return Err(DatasetError::BadMagic {
            path: path.to_path_buf(),
            kind: kind.as_str(),
            expected: kind.expected_magic(),
            found: magic,
        });
    }

    let count = read_u32_be(reader, path)? as usize;
    let (rows, cols) = match kind {
        RecordKind::Images => (
            read_u32_be(reader, path)? as usize,
            read_u32_be(reader, path)? as usize,
        ),
        RecordKind::Labels => (0, 0),
    };

    Ok(IdxHeader {
        magic,
        count,
        rows,
        cols,
    })
}

/// One big-endian header field.
fn read_u32_be(reader: &mut dyn Read, path: &Path) -> Result<u32, DatasetError> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(u32::from_be_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn image_header_bytes(count: u32, rows: u32, cols: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&IMAGE_MAGIC.to_be_bytes());
        bytes.extend_from_slice(&count.to_be_bytes());
        bytes.extend_from_slice(&rows.to_be_bytes());
        bytes.extend_from_slice(&cols.to_be_bytes());
        bytes
    }

    #[test]
    fn test_parse_image_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.idx3-ubyte");
        std::fs::write(&path, image_header_bytes(60000, 28, 28)).unwrap();

        let header = read_header(&path, RecordKind::Images).unwrap();
        assert_eq!(header.magic, IMAGE_MAGIC);
        assert_eq!(header.count, 60000);
        assert_eq!(header.rows, 28);
        assert_eq!(header.cols, 28);
    }

    #[test]
    fn test_parse_label_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.idx1-ubyte");
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&LABEL_MAGIC.to_be_bytes());
        bytes.extend_from_slice(&10000u32.to_be_bytes());
        std::fs::write(&path, bytes).unwrap();

        let header = read_header(&path, RecordKind::Labels).unwrap();
        assert_eq!(header.count, 10000);
        assert_eq!(header.rows, 0);
        assert_eq!(header.cols, 0);
    }

    #[test]
    fn test_wrong_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.idx1-ubyte");
        // An image magic where a label file is expected.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&IMAGE_MAGIC.to_be_bytes());
        bytes.extend_from_slice(&5u32.to_be_bytes());
        std::fs::write(&path, bytes).unwrap();

        let err = read_header(&path, RecordKind::Labels).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::BadMagic {
                expected: LABEL_MAGIC,
                found: IMAGE_MAGIC,
                ..
            }
        ));
    }

    #[test]
    fn test_short_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stub.idx3-ubyte");
        std::fs::write(&path, IMAGE_MAGIC.to_be_bytes()).unwrap();

        let err = read_header(&path, RecordKind::Images).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_gzipped_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.idx3-ubyte.gz");

        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&image_header_bytes(3, 4, 5)).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let header = read_header(&path, RecordKind::Images).unwrap();
        assert_eq!(header.count, 3);
        assert_eq!(header.rows, 4);
        assert_eq!(header.cols, 5);
    }
}
