//! Compressed lower-triangular distance matrix
//!
//! Stores the `n(n-1)/2` strictly lower entries row by row plus a diagonal of
//! per-vertex weights. Upper-triangular input is a different serialization
//! of the same logical matrix and is re-indexed into this layout on load.

use crate::{DistanceMatrix, Index, RipsError, Value};
use ripsprep_core::{lower_offset, triangle_len, upper_offset, vertex_count};

/// Canonical dense representation
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedLowerDistanceMatrix {
    distances: Vec<Value>,
    diagonal: Vec<Value>,
}

impl CompressedLowerDistanceMatrix {
    /// Build from row-major lower-triangular values with a zero diagonal
    ///
    /// The vertex count is inferred from the number of values. Values beyond
    /// the last complete row are dropped.
    pub fn from_distances(mut distances: Vec<Value>) -> Self {
        let n = complete_rows(distances.len(), "lower");
        distances.truncate(triangle_len(n));
        Self {
            distances,
            diagonal: vec![0.0; n],
        }
    }

    /// Build from row-major upper-triangular values with a zero diagonal
    ///
    /// Same inference and truncation as [`Self::from_distances`].
    pub fn from_upper(upper: Vec<Value>) -> Self {
        let n = complete_rows(upper.len(), "upper");
        let mut distances = Vec::with_capacity(triangle_len(n));
        for i in 1..n {
            for j in 0..i {
                distances.push(upper[upper_offset(n, j, i)]);
            }
        }
        Self {
            distances,
            diagonal: vec![0.0; n],
        }
    }

    /// Build from lower-triangular values for a known vertex count
    pub fn from_parts(distances: Vec<Value>, n: usize) -> Result<Self, RipsError> {
        let expected = triangle_len(n);
        if distances.len() != expected {
            return Err(RipsError::DimensionMismatch {
                expected,
                found: distances.len(),
            });
        }
        Ok(Self {
            distances,
            diagonal: vec![0.0; n],
        })
    }

    /// Materialize any distance matrix, e.g. a point cloud
    pub fn from_matrix<M: DistanceMatrix>(matrix: &M) -> Self {
        let n = matrix.size();
        let mut distances = Vec::with_capacity(triangle_len(n));
        for i in 1..n {
            for j in 0..i {
                distances.push(matrix.distance(i, j));
            }
        }
        Self {
            distances,
            diagonal: (0..n).map(|i| matrix.distance(i, i)).collect(),
        }
    }

    /// Replace the diagonal with per-vertex weights
    pub fn with_diagonal(mut self, diagonal: Vec<Value>) -> Result<Self, RipsError> {
        if diagonal.len() != self.diagonal.len() {
            return Err(RipsError::IndexOutOfBounds);
        }
        self.diagonal = diagonal;
        Ok(self)
    }

    /// Stored off-diagonal values in layout order
    pub fn distances(&self) -> &[Value] {
        &self.distances
    }

    pub fn diagonal(&self) -> &[Value] {
        &self.diagonal
    }
}

/// Vertices fully described by `len` triangular values, warning on a tail
fn complete_rows(len: usize, layout: &str) -> usize {
    let n = vertex_count(len);
    let extra = len - triangle_len(n);
    if extra > 0 {
        tracing::warn!(
            values = len,
            vertices = n,
            layout,
            "ignoring {extra} values past the last complete row"
        );
    }
    n
}

impl DistanceMatrix for CompressedLowerDistanceMatrix {
    fn size(&self) -> usize {
        self.diagonal.len()
    }

    fn distance(&self, i: Index, j: Index) -> Value {
        match i.cmp(&j) {
            core::cmp::Ordering::Equal => self.diagonal[i],
            core::cmp::Ordering::Greater => self.distances[lower_offset(i, j)],
            core::cmp::Ordering::Less => self.distances[lower_offset(j, i)],
        }
    }
}
