//! Format constants for binary inputs

/// DIPHA magic number, stored as a little-endian i64
pub const DIPHA_MAGIC: i64 = 8_067_171_840;

/// DIPHA file type tag for a distance matrix
pub const DIPHA_DISTANCE_MATRIX: i64 = 7;

/// Size of the DIPHA distance matrix header in bytes
pub const DIPHA_HEADER_SIZE: usize = 24;
