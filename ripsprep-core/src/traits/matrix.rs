//! Distance matrix capability traits
//!
//! Every representation handed to the homology engine answers `size` and
//! `distance`. Sparse representations additionally expose their ordered
//! adjacency lists.

use crate::{Index, Value};

/// Core capability shared by dense, sparse and point cloud matrices
pub trait DistanceMatrix {
    /// Number of vertices
    fn size(&self) -> usize;

    /// Distance between `i` and `j`
    ///
    /// `distance(i, i)` is the vertex weight (diagonal) and
    /// `distance(i, j) == distance(j, i)`. Indices at or beyond `size()` are
    /// outside the contract.
    fn distance(&self, i: Index, j: Index) -> Value;

    /// Farthest distance seen from `i`, including its own diagonal weight
    fn star(&self, i: Index) -> Value {
        (0..self.size())
            .map(|j| self.distance(i, j))
            .fold(Value::NEG_INFINITY, Value::max)
    }
}

/// A neighbor together with the diameter of the connecting edge
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexDiameter {
    pub index: Index,
    pub diameter: Value,
}

impl IndexDiameter {
    pub const fn new(index: Index, diameter: Value) -> Self {
        Self { index, diameter }
    }
}

/// Ordered neighbor iteration for adjacency-list representations
pub trait NeighborAccess: DistanceMatrix {
    /// Neighbors of `i`, sorted by neighbor index
    fn neighbors(&self, i: Index) -> &[IndexDiameter];

    /// Number of undirected edges
    fn num_edges(&self) -> usize;
}
