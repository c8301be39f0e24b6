//! Enclosing radius and value range of dense matrices
//!
//! The star of vertex `i` is the farthest distance from `i` to any vertex,
//! its own diagonal weight included. Once the filtration reaches the smallest
//! star, some vertex is connected to every other vertex; the Rips complex
//! becomes a cone and stops changing, so larger values are redundant.

use crate::{CompressedLowerDistanceMatrix, DistanceMatrix, Value};

/// Summary of the off-diagonal entries of a dense matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueRange {
    /// Smallest entry
    pub min: Value,
    /// Largest entry, possibly infinite
    pub max: Value,
    /// Largest finite entry, `None` when there is none
    pub max_finite: Option<Value>,
    /// Entries at or below the threshold the scan was run with
    pub num_edges: usize,
}

impl ValueRange {
    /// Scan every stored off-diagonal entry
    pub fn scan(matrix: &CompressedLowerDistanceMatrix, threshold: Value) -> Self {
        let mut range = Self {
            min: Value::INFINITY,
            max: Value::NEG_INFINITY,
            max_finite: None,
            num_edges: 0,
        };

        for &d in matrix.distances() {
            range.min = range.min.min(d);
            range.max = range.max.max(d);
            if d.is_finite() {
                range.max_finite = Some(range.max_finite.map_or(d, |m| m.max(d)));
            }
            if d <= threshold {
                range.num_edges += 1;
            }
        }
        range
    }
}

/// `min_i max_j d(i, j)` over any distance matrix, infinity when empty
pub fn enclosing_radius<M: DistanceMatrix>(matrix: &M) -> Value {
    (0..matrix.size())
        .map(|i| matrix.star(i))
        .fold(Value::INFINITY, Value::min)
}

/// Enclosing radius with the disconnected-graph policy applied
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnclosingRadius {
    /// Radius clamped to the largest finite entry
    pub radius: Value,
    /// Every star was infinite
    pub disconnected: bool,
}

impl EnclosingRadius {
    /// Compute the radius the engine should run with
    ///
    /// The raw radius is clamped to the largest finite entry. When every star
    /// is infinite this makes the radius that largest finite entry, keeping
    /// all finite edges. A matrix without finite off-diagonal entries clamps
    /// to 0.
    pub fn compute(matrix: &CompressedLowerDistanceMatrix, range: &ValueRange) -> Self {
        let raw = enclosing_radius(matrix);
        let max_finite = range.max_finite.unwrap_or(0.0);
        let disconnected = matrix.size() > 0 && raw == Value::INFINITY;

        if disconnected {
            tracing::warn!(
                max_finite,
                "every vertex has an infinite star, using the largest finite distance"
            );
        }

        Self {
            radius: raw.min(max_finite),
            disconnected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn brute_force(matrix: &CompressedLowerDistanceMatrix) -> Value {
        let n = matrix.size();
        let mut best = Value::INFINITY;
        for i in 0..n {
            let mut star = Value::NEG_INFINITY;
            for j in 0..n {
                star = star.max(matrix.distance(i, j));
            }
            best = best.min(star);
        }
        best
    }

    #[test]
    fn test_radius_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=6 {
            for _ in 0..20 {
                let values = (0..n * (n - 1) / 2).map(|_| rng.gen_range(0.0..10.0)).collect();
                let matrix = CompressedLowerDistanceMatrix::from_distances(values);
                let range = ValueRange::scan(&matrix, Value::MAX);
                let radius = EnclosingRadius::compute(&matrix, &range);

                assert_eq!(radius.radius, brute_force(&matrix));
                assert!(!radius.disconnected);
                if let Some(max_finite) = range.max_finite {
                    assert!(radius.radius <= max_finite);
                }
            }
        }
    }

    #[test]
    fn test_radius_of_four_points() {
        let matrix =
            CompressedLowerDistanceMatrix::from_distances(vec![1.0, 2.0, 4.0, 3.0, 5.0, 6.0]);
        assert_eq!(enclosing_radius(&matrix), 3.0);
    }

    #[test]
    fn test_diagonal_counts_toward_star() {
        let matrix = CompressedLowerDistanceMatrix::from_distances(vec![1.0])
            .with_diagonal(vec![4.0, 3.0])
            .unwrap();
        assert_eq!(enclosing_radius(&matrix), 3.0);
    }

    #[test]
    fn test_disconnected_clamps_to_max_finite() {
        // Two pairs, no edge between them
        let inf = Value::INFINITY;
        let matrix =
            CompressedLowerDistanceMatrix::from_distances(vec![1.0, inf, inf, inf, inf, 2.0]);
        let range = ValueRange::scan(&matrix, Value::MAX);
        assert_eq!(range.max_finite, Some(2.0));
        assert_eq!(range.max, inf);
        assert_eq!(range.min, 1.0);
        assert_eq!(range.num_edges, 2);

        let radius = EnclosingRadius::compute(&matrix, &range);
        assert!(radius.disconnected);
        assert_eq!(radius.radius, 2.0);
    }

    #[test]
    fn test_single_vertex() {
        let matrix = CompressedLowerDistanceMatrix::from_distances(Vec::new());
        let range = ValueRange::scan(&matrix, Value::MAX);
        assert_eq!(range.max_finite, None);
        assert_eq!(range.num_edges, 0);
        let radius = EnclosingRadius::compute(&matrix, &range);
        assert_eq!(radius.radius, 0.0);
        assert!(!radius.disconnected);
    }
}
