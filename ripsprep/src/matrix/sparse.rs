//! Sparse adjacency-list distance matrix
//!
//! Each vertex keeps its neighbors sorted by index so downstream consumers
//! can intersect neighbor lists without re-sorting. The relation is
//! symmetric and never contains self-loops.

use crate::{DistanceMatrix, Index, IndexDiameter, NeighborAccess, Value};

/// Canonical sparse representation
#[derive(Debug, Clone, PartialEq)]
pub struct SparseDistanceMatrix {
    neighbors: Vec<Vec<IndexDiameter>>,
    diagonal: Vec<Value>,
    num_edges: usize,
}

impl SparseDistanceMatrix {
    /// Build from undirected `(i, j, diameter)` edges
    ///
    /// Self-loops are discarded, as are edges touching `Index::MAX`. Every
    /// other edge is inserted into both adjacency lists and counted once. The
    /// vertex count is one past the largest index seen.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Index, Index, Value)>,
    {
        let mut neighbors: Vec<Vec<IndexDiameter>> = Vec::new();
        let mut num_edges = 0;

        for (i, j, diameter) in edges {
            if i == j {
                continue;
            }
            let Some(needed) = i.max(j).checked_add(1) else {
                tracing::warn!(i, j, "dropping edge with an unrepresentable vertex index");
                continue;
            };
            if neighbors.len() < needed {
                neighbors.resize_with(needed, Vec::new);
            }
            neighbors[i].push(IndexDiameter::new(j, diameter));
            neighbors[j].push(IndexDiameter::new(i, diameter));
            num_edges += 1;
        }

        for list in &mut neighbors {
            list.sort_by(|a, b| {
                a.index
                    .cmp(&b.index)
                    .then(a.diameter.total_cmp(&b.diameter))
            });
        }

        let diagonal = vec![0.0; neighbors.len()];
        Self {
            neighbors,
            diagonal,
            num_edges,
        }
    }

    /// Keep only the entries of `matrix` at or below `threshold`
    ///
    /// Each unordered pair is evaluated once, so a point cloud computes every
    /// Euclidean distance a single time. Lists come out sorted because pairs
    /// are visited in row-major order.
    pub fn from_matrix<M: DistanceMatrix>(matrix: &M, threshold: Value) -> Self {
        let n = matrix.size();
        let mut neighbors: Vec<Vec<IndexDiameter>> = vec![Vec::new(); n];
        let mut num_edges = 0;

        for i in 0..n {
            for j in 0..i {
                let diameter = matrix.distance(i, j);
                if diameter <= threshold {
                    neighbors[i].push(IndexDiameter::new(j, diameter));
                    neighbors[j].push(IndexDiameter::new(i, diameter));
                    num_edges += 1;
                }
            }
        }

        Self {
            neighbors,
            diagonal: (0..n).map(|i| matrix.distance(i, i)).collect(),
            num_edges,
        }
    }

    pub fn diagonal(&self) -> &[Value] {
        &self.diagonal
    }

    /// Each undirected edge once, as `(i, j, diameter)` with `i < j`
    pub fn edges(&self) -> impl Iterator<Item = (Index, Index, Value)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(i, list)| {
            list.iter()
                .filter(move |neighbor| neighbor.index > i)
                .map(move |neighbor| (i, neighbor.index, neighbor.diameter))
        })
    }
}

impl DistanceMatrix for SparseDistanceMatrix {
    fn size(&self) -> usize {
        self.neighbors.len()
    }

    /// Stored diameter, or infinity when the edge is absent
    fn distance(&self, i: Index, j: Index) -> Value {
        if i == j {
            return self.diagonal[i];
        }
        let list = &self.neighbors[i];
        match list.binary_search_by_key(&j, |neighbor| neighbor.index) {
            Ok(position) => list[position].diameter,
            Err(_) => Value::INFINITY,
        }
    }
}

impl NeighborAccess for SparseDistanceMatrix {
    fn neighbors(&self, i: Index) -> &[IndexDiameter] {
        &self.neighbors[i]
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompressedLowerDistanceMatrix;

    #[test]
    fn test_from_edges_symmetric_and_sorted() {
        let matrix =
            SparseDistanceMatrix::from_edges([(2, 0, 1.5), (0, 1, 0.5), (3, 3, 9.0), (1, 2, 2.0)]);
        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.num_edges(), 3);
        assert_eq!(
            matrix.neighbors(0),
            &[IndexDiameter::new(1, 0.5), IndexDiameter::new(2, 1.5)]
        );
        assert_eq!(matrix.distance(2, 1), 2.0);
        assert_eq!(matrix.distance(1, 2), 2.0);
        assert_eq!(matrix.distance(1, 1), 0.0);
        for i in 0..matrix.size() {
            assert!(matrix.neighbors(i).iter().all(|n| n.index != i));
        }
    }

    #[test]
    fn test_self_loop_only_vertex_not_counted() {
        let matrix = SparseDistanceMatrix::from_edges([(0, 1, 1.0), (4, 4, 2.0)]);
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.num_edges(), 1);
    }

    #[test]
    fn test_unrepresentable_index_dropped() {
        let matrix = SparseDistanceMatrix::from_edges([(0, 1, 1.0), (0, Index::MAX, 2.0)]);
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.num_edges(), 1);
    }

    #[test]
    fn test_from_matrix_threshold() {
        let dense =
            CompressedLowerDistanceMatrix::from_distances(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let sparse = SparseDistanceMatrix::from_matrix(&dense, 3.0);
        assert_eq!(sparse.num_edges(), 3);
        assert_eq!(sparse.distance(1, 0), 1.0);
        assert_eq!(sparse.distance(2, 1), 3.0);
        assert_eq!(sparse.distance(3, 0), Value::INFINITY);
        assert_eq!(
            sparse.edges().collect::<Vec<_>>(),
            vec![(0, 1, 1.0), (0, 2, 2.0), (1, 2, 3.0)]
        );
    }

    #[test]
    fn test_from_matrix_lists_sorted() {
        let values = (1..=15).map(|v| v as Value).collect();
        let dense = CompressedLowerDistanceMatrix::from_distances(values);
        let sparse = SparseDistanceMatrix::from_matrix(&dense, Value::INFINITY);
        assert_eq!(sparse.num_edges(), 15);
        for i in 0..sparse.size() {
            let indices: Vec<_> = sparse.neighbors(i).iter().map(|n| n.index).collect();
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(indices.len(), 5);
        }
    }
}
