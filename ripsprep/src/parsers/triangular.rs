//! Lower- and upper-triangular token streams
//!
//! Both read a flat stream of `n(n-1)/2` scalars without a diagonal; `n` is
//! inferred from the count.

use crate::reader::TokenStream;
use crate::{CompressedLowerDistanceMatrix, Result};
use std::io::BufRead;

/// Row-major strictly lower triangle, stored as is
pub fn read_lower_distance_matrix<R: BufRead>(reader: R) -> Result<CompressedLowerDistanceMatrix> {
    let distances = TokenStream::new(reader).collect_values()?;
    tracing::debug!(values = distances.len(), "read lower-triangular distances");
    Ok(CompressedLowerDistanceMatrix::from_distances(distances))
}

/// Row-major strictly upper triangle, re-indexed into the lower layout
pub fn read_upper_distance_matrix<R: BufRead>(reader: R) -> Result<CompressedLowerDistanceMatrix> {
    let distances = TokenStream::new(reader).collect_values()?;
    tracing::debug!(values = distances.len(), "read upper-triangular distances");
    Ok(CompressedLowerDistanceMatrix::from_upper(distances))
}
