//! Representation selection
//!
//! One decision per run, a pure function of the input shape and the user
//! threshold:
//!
//! - unbounded request: dense matrix, threshold = enclosing radius
//! - bounded point cloud: sparse matrix built straight from the points
//! - bounded formed matrix: dense matrix filtered into a sparse one
//!
//! Edge lists are sparse already and run with the user threshold as given.

use crate::engine::{EngineInvocation, EngineParams, HomologyEngine};
use crate::radius::{EnclosingRadius, ValueRange};
use crate::{
    is_unbounded, CompressedLowerDistanceMatrix, DistanceMatrix, InputFormat, MatrixRepr,
    NeighborAccess, ParsedInput, PrepConfig, SparseDistanceMatrix, Value,
};

/// Which branch of the decision a run took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum SelectionState {
    /// No user threshold: dense path capped at the enclosing radius
    Unbounded,
    /// Finite threshold on a point cloud
    BoundedPointCloud,
    /// Finite threshold on an already formed distance matrix
    BoundedMatrix,
    /// Edge-list input, sparse from the start
    EdgeList,
}

/// Decide the branch for `format` under `threshold`
pub fn select(format: InputFormat, threshold: Value) -> SelectionState {
    if format == InputFormat::Sparse {
        SelectionState::EdgeList
    } else if is_unbounded(threshold) {
        SelectionState::Unbounded
    } else if format.is_point_cloud() {
        SelectionState::BoundedPointCloud
    } else {
        SelectionState::BoundedMatrix
    }
}

/// Representation handed to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "kebab-case")
)]
pub enum Representation {
    Dense,
    Sparse { num_edges: usize },
}

/// Serializable description of a prepared run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub state: SelectionState,
    pub representation: Representation,
    pub size: usize,
    pub enclosing_radius: Option<EnclosingRadius>,
    pub value_range: Option<ValueRange>,
    pub params: EngineParams,
}

/// Canonical matrix plus everything the engine needs, owned by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedInput {
    matrix: MatrixRepr,
    state: SelectionState,
    params: EngineParams,
    enclosing_radius: Option<EnclosingRadius>,
    value_range: Option<ValueRange>,
}

impl PreparedInput {
    pub fn matrix(&self) -> &MatrixRepr {
        &self.matrix
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Effective threshold handed to the engine
    pub fn threshold(&self) -> Value {
        self.params.threshold
    }

    /// Only computed on the unbounded path
    pub fn enclosing_radius(&self) -> Option<EnclosingRadius> {
        self.enclosing_radius
    }

    /// Only computed on the unbounded path
    pub fn value_range(&self) -> Option<ValueRange> {
        self.value_range
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    pub fn representation(&self) -> Representation {
        match &self.matrix {
            MatrixRepr::Dense(_) => Representation::Dense,
            MatrixRepr::Sparse(matrix) => Representation::Sparse {
                num_edges: matrix.num_edges(),
            },
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            state: self.state,
            representation: self.representation(),
            size: self.size(),
            enclosing_radius: self.enclosing_radius,
            value_range: self.value_range,
            params: self.params,
        }
    }

    /// A private deep copy of the matrix for one engine run
    ///
    /// Repeated runs never observe mutation an engine performed on an
    /// earlier copy.
    pub fn invocation(&self) -> EngineInvocation {
        EngineInvocation {
            matrix: self.matrix.clone(),
            params: self.params,
        }
    }

    /// Copy, then hand off to `engine`
    pub fn run<E: HomologyEngine>(&self, engine: &mut E) -> Result<E::Barcodes, E::Error> {
        self.invocation().run(engine)
    }
}

fn dense_path(
    matrix: CompressedLowerDistanceMatrix,
    config: &PrepConfig,
) -> (MatrixRepr, Value, Option<EnclosingRadius>, Option<ValueRange>) {
    let range = ValueRange::scan(&matrix, config.threshold);
    let radius = EnclosingRadius::compute(&matrix, &range);
    tracing::debug!(
        min = range.min,
        max = range.max,
        max_finite = ?range.max_finite,
        "value range"
    );
    (
        MatrixRepr::Dense(matrix),
        radius.radius,
        Some(radius),
        Some(range),
    )
}

fn sparse_path<M: DistanceMatrix>(
    matrix: &M,
    threshold: Value,
) -> (MatrixRepr, Value, Option<EnclosingRadius>, Option<ValueRange>) {
    let sparse = SparseDistanceMatrix::from_matrix(matrix, threshold);
    (MatrixRepr::Sparse(sparse), threshold, None, None)
}

/// Choose representation and effective threshold for a parsed input
pub fn prepare(input: ParsedInput, config: &PrepConfig) -> PreparedInput {
    let format = match &input {
        ParsedInput::PointCloud(_) => InputFormat::PointCloud,
        ParsedInput::Sparse(_) => InputFormat::Sparse,
        ParsedInput::Dense(_) => match config.format {
            InputFormat::PointCloud | InputFormat::Sparse => InputFormat::LowerDistance,
            declared => declared,
        },
    };
    let state = select(format, config.threshold);

    let (matrix, threshold, enclosing_radius, value_range) = match (state, input) {
        (SelectionState::Unbounded, ParsedInput::Dense(dense)) => dense_path(dense, config),
        (SelectionState::Unbounded, ParsedInput::PointCloud(cloud)) => {
            dense_path(CompressedLowerDistanceMatrix::from_matrix(&cloud), config)
        }
        (_, ParsedInput::PointCloud(cloud)) => sparse_path(&cloud, config.threshold),
        (_, ParsedInput::Dense(dense)) => sparse_path(&dense, config.threshold),
        (_, ParsedInput::Sparse(sparse)) => {
            (MatrixRepr::Sparse(sparse), config.threshold, None, None)
        }
    };

    let prepared = PreparedInput {
        matrix,
        state,
        params: EngineParams::new(config, threshold),
        enclosing_radius,
        value_range,
    };

    tracing::info!(
        state = ?prepared.state,
        representation = ?prepared.representation(),
        vertices = prepared.size(),
        threshold = prepared.threshold(),
        "selected representation"
    );
    prepared
}
