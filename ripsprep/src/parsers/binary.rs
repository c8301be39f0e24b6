//! Binary distance matrix parsers
//!
//! DIPHA stores a full `n x n` f64 matrix behind a three-field header; the
//! raw format is a bare little-endian f32 lower triangle. Both go through
//! [`BinaryReader`], so truncated input follows the configured short-read
//! policy.

use crate::reader::{BinaryReader, ShortReadPolicy};
use crate::{CompressedLowerDistanceMatrix, DiphaHeader, Endianness, Result, RipsError, Value};
use std::io::Read;

/// Read a DIPHA distance matrix, keeping entries below the diagonal
pub fn read_dipha<R: Read>(
    reader: R,
    platform: Endianness,
    policy: ShortReadPolicy,
) -> Result<CompressedLowerDistanceMatrix> {
    let mut reader = BinaryReader::new(reader, platform, policy);

    let magic = reader.read::<i64>()?;
    let file_type = reader.read::<i64>()?;
    let num_points = reader.read::<i64>()?;
    let header = DiphaHeader::from_fields(magic, file_type, num_points)?;
    let n = header.size().ok_or(RipsError::InvalidHeader)?;

    // Grows with the payload; the header alone does not justify a reservation
    let mut distances = Vec::new();
    for i in 0..n {
        for j in 0..n {
            let value = reader.read::<f64>()?;
            if i > j {
                distances.push(value as Value);
            }
        }
    }

    tracing::debug!(vertices = n, "read DIPHA distance matrix");
    Ok(CompressedLowerDistanceMatrix::from_parts(distances, n)?)
}

/// Read raw little-endian f32 values forming a lower triangle
pub fn read_binary<R: Read>(
    reader: R,
    platform: Endianness,
    policy: ShortReadPolicy,
) -> Result<CompressedLowerDistanceMatrix> {
    let mut reader = BinaryReader::new(reader, platform, policy);

    let mut distances = Vec::new();
    while let Some(value) = reader.read_or_end::<Value>()? {
        distances.push(value);
    }

    tracing::debug!(values = distances.len(), "read binary lower-triangular distances");
    Ok(CompressedLowerDistanceMatrix::from_distances(distances))
}
