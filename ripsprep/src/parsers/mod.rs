//! Format parsers
//!
//! One parser per supported input shape. The format is always chosen by the
//! caller; [`read_matrix`] dispatches on it and returns the canonical form
//! the parser produces.

pub mod binary;
pub mod edge_list;
pub mod full;
pub mod point_cloud;
pub mod triangular;

pub use binary::{read_binary, read_dipha};
pub use edge_list::read_sparse_distance_matrix;
pub use full::read_distance_matrix;
pub use point_cloud::read_point_cloud;
pub use triangular::{read_lower_distance_matrix, read_upper_distance_matrix};

use crate::{
    CompressedLowerDistanceMatrix, DistanceMatrix, Endianness, EuclideanDistanceMatrix,
    InputFormat, PrepConfig, Result, SparseDistanceMatrix,
};
use std::io::BufRead;

/// Canonical matrix produced by a format parser
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedInput {
    PointCloud(EuclideanDistanceMatrix),
    Dense(CompressedLowerDistanceMatrix),
    Sparse(SparseDistanceMatrix),
}

impl ParsedInput {
    /// Number of vertices
    pub fn size(&self) -> usize {
        match self {
            ParsedInput::PointCloud(matrix) => matrix.size(),
            ParsedInput::Dense(matrix) => matrix.size(),
            ParsedInput::Sparse(matrix) => matrix.size(),
        }
    }
}

/// Parse `reader` according to `config.format`
pub fn read_matrix<R: BufRead>(reader: R, config: &PrepConfig) -> Result<ParsedInput> {
    let platform = Endianness::native();
    let parsed = match config.format {
        InputFormat::LowerDistance => ParsedInput::Dense(read_lower_distance_matrix(reader)?),
        InputFormat::UpperDistance => ParsedInput::Dense(read_upper_distance_matrix(reader)?),
        InputFormat::Distance => {
            ParsedInput::Dense(read_distance_matrix(reader, config.verify_symmetry)?)
        }
        InputFormat::PointCloud => ParsedInput::PointCloud(read_point_cloud(reader)?),
        InputFormat::Dipha => ParsedInput::Dense(read_dipha(reader, platform, config.short_read)?),
        InputFormat::Sparse => ParsedInput::Sparse(read_sparse_distance_matrix(reader)?),
        InputFormat::Binary => {
            ParsedInput::Dense(read_binary(reader, platform, config.short_read)?)
        }
    };

    tracing::debug!(format = %config.format, vertices = parsed.size(), "parsed input");
    Ok(parsed)
}
