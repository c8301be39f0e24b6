//! DIPHA distance matrix header
//!
//! A DIPHA distance matrix starts with three little-endian i64 fields
//! (magic, file type, point count) followed by `n * n` f64 entries in
//! row-major order.

use super::constants::{DIPHA_DISTANCE_MATRIX, DIPHA_HEADER_SIZE, DIPHA_MAGIC};
use crate::{Result, RipsError};

/// Fixed-size header of a DIPHA distance matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiphaHeader {
    /// Magic number, must be [`DIPHA_MAGIC`]
    pub magic: i64,
    /// File type tag, must be [`DIPHA_DISTANCE_MATRIX`]
    pub file_type: i64,
    /// Number of points
    pub num_points: i64,
}

impl DiphaHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = DIPHA_HEADER_SIZE;

    /// Create a distance matrix header for `num_points` points
    pub const fn new(num_points: i64) -> Self {
        Self {
            magic: DIPHA_MAGIC,
            file_type: DIPHA_DISTANCE_MATRIX,
            num_points,
        }
    }

    /// Build a header from already decoded fields, validating each one
    ///
    /// The point count must be non-negative and its `n * n` f64 payload must
    /// be addressable on this platform.
    pub fn from_fields(magic: i64, file_type: i64, num_points: i64) -> Result<Self> {
        if magic != DIPHA_MAGIC {
            return Err(RipsError::NotDipha);
        }
        if file_type != DIPHA_DISTANCE_MATRIX {
            return Err(RipsError::NotDiphaDistanceMatrix);
        }
        let header = Self::new(num_points);
        header
            .entry_count()
            .and_then(|count| count.checked_mul(core::mem::size_of::<f64>()))
            .ok_or(RipsError::InvalidHeader)?;
        Ok(header)
    }

    /// Serialize header to little-endian bytes
    pub fn to_bytes(&self) -> [u8; DIPHA_HEADER_SIZE] {
        let mut bytes = [0u8; DIPHA_HEADER_SIZE];
        bytes[0..8].copy_from_slice(&self.magic.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.file_type.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.num_points.to_le_bytes());
        bytes
    }

    /// Number of points as an index count, `None` when negative or too large
    pub fn size(&self) -> Option<usize> {
        usize::try_from(self.num_points).ok()
    }

    /// Number of f64 entries following the header, `None` on overflow
    pub fn entry_count(&self) -> Option<usize> {
        self.size().and_then(|n| n.checked_mul(n))
    }
}
