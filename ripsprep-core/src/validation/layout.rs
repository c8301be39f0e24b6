//! Compressed triangular index arithmetic
//!
//! The canonical dense layout stores the strictly lower triangle row by row:
//! `d(1,0), d(2,0), d(2,1), d(3,0), ...`. The upper-triangular serialization
//! stores `d(0,1), d(0,2), ..., d(1,2), ...` and maps to different offsets
//! for the same logical entry.

/// Number of off-diagonal entries stored for `n` vertices
pub const fn triangle_len(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Vertex count inferred from the number of stored entries
///
/// Computes `(1 + sqrt(1 + 8 * len)) / 2` rounded down, which is exact
/// whenever `len` is a triangular number.
pub fn vertex_count(len: usize) -> usize {
    (1 + (1 + 8 * len).isqrt()) / 2
}

/// Offset of `(i, j)`, `i > j`, in the lower-triangular layout
pub const fn lower_offset(i: usize, j: usize) -> usize {
    i * (i - 1) / 2 + j
}

/// Offset of `(i, j)`, `i < j`, in the upper-triangular layout of `n` vertices
pub const fn upper_offset(n: usize, i: usize, j: usize) -> usize {
    i * (2 * n - i - 1) / 2 + (j - i - 1)
}
