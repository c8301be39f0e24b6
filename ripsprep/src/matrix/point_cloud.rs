//! Point cloud with on-demand Euclidean distances
//!
//! Pairwise distances are never materialized here; each query costs
//! O(dimension).

use crate::{DistanceMatrix, Index, RipsError, Value};

/// Points of identical dimension, owned exclusively
#[derive(Debug, Clone, PartialEq)]
pub struct EuclideanDistanceMatrix {
    points: Vec<Vec<Value>>,
    diagonal: Vec<Value>,
}

impl EuclideanDistanceMatrix {
    /// Take ownership of `points`, rejecting mixed dimensions
    pub fn new(points: Vec<Vec<Value>>) -> Result<Self, RipsError> {
        if let Some(first) = points.first() {
            let expected = first.len();
            if let Some(point) = points.iter().find(|p| p.len() != expected) {
                return Err(RipsError::DimensionMismatch {
                    expected,
                    found: point.len(),
                });
            }
        }
        let diagonal = vec![0.0; points.len()];
        Ok(Self { points, diagonal })
    }

    pub fn points(&self) -> &[Vec<Value>] {
        &self.points
    }

    /// Dimension of every point, 0 for an empty cloud
    pub fn dimension(&self) -> usize {
        self.points.first().map_or(0, Vec::len)
    }
}

impl DistanceMatrix for EuclideanDistanceMatrix {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, i: Index, j: Index) -> Value {
        if i == j {
            return self.diagonal[i];
        }
        self.points[i]
            .iter()
            .zip(&self.points[j])
            .map(|(u, v)| (u - v) * (u - v))
            .sum::<Value>()
            .sqrt()
    }
}
