//! Distance matrix representations
//!
//! Two canonical forms reach the homology engine: the dense compressed lower
//! triangle and the sparse adjacency lists. The point cloud form answers
//! distances on demand and is converted into one of the two before the
//! engine sees it.

pub mod dense;
pub mod point_cloud;
pub mod sparse;

pub use dense::CompressedLowerDistanceMatrix;
pub use point_cloud::EuclideanDistanceMatrix;
pub use sparse::SparseDistanceMatrix;

use crate::{DistanceMatrix, Index, IndexDiameter, NeighborAccess, Value};

/// The matrix handed to the engine, fixed once at construction
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixRepr {
    Dense(CompressedLowerDistanceMatrix),
    Sparse(SparseDistanceMatrix),
}

impl MatrixRepr {
    /// Ordered neighbors of `i`, available for the sparse variant only
    pub fn neighbors(&self, i: Index) -> Option<&[IndexDiameter]> {
        match self {
            MatrixRepr::Dense(_) => None,
            MatrixRepr::Sparse(matrix) => Some(matrix.neighbors(i)),
        }
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self, MatrixRepr::Sparse(_))
    }

    pub fn as_dense(&self) -> Option<&CompressedLowerDistanceMatrix> {
        match self {
            MatrixRepr::Dense(matrix) => Some(matrix),
            MatrixRepr::Sparse(_) => None,
        }
    }

    pub fn as_sparse(&self) -> Option<&SparseDistanceMatrix> {
        match self {
            MatrixRepr::Dense(_) => None,
            MatrixRepr::Sparse(matrix) => Some(matrix),
        }
    }
}

impl DistanceMatrix for MatrixRepr {
    fn size(&self) -> usize {
        match self {
            MatrixRepr::Dense(matrix) => matrix.size(),
            MatrixRepr::Sparse(matrix) => matrix.size(),
        }
    }

    fn distance(&self, i: Index, j: Index) -> Value {
        match self {
            MatrixRepr::Dense(matrix) => matrix.distance(i, j),
            MatrixRepr::Sparse(matrix) => matrix.distance(i, j),
        }
    }
}

impl From<CompressedLowerDistanceMatrix> for MatrixRepr {
    fn from(matrix: CompressedLowerDistanceMatrix) -> Self {
        MatrixRepr::Dense(matrix)
    }
}

impl From<SparseDistanceMatrix> for MatrixRepr {
    fn from(matrix: SparseDistanceMatrix) -> Self {
        MatrixRepr::Sparse(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_agree_on_distances() {
        let dense = CompressedLowerDistanceMatrix::from_distances(vec![1.0, 2.0, 3.0]);
        let sparse = SparseDistanceMatrix::from_matrix(&dense, Value::INFINITY);
        let dense = MatrixRepr::from(dense);
        let sparse = MatrixRepr::from(sparse);

        assert_eq!(dense.size(), 3);
        assert_eq!(sparse.size(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(dense.distance(i, j), sparse.distance(i, j));
            }
        }
        assert!(dense.neighbors(0).is_none());
        assert_eq!(sparse.neighbors(2).map(<[_]>::len), Some(2));
        assert!(sparse.is_sparse() && !dense.is_sparse());
        assert!(dense.as_dense().is_some() && sparse.as_sparse().is_some());
    }
}
