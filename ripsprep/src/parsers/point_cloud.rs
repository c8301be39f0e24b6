//! Point cloud parser: one point per line

use crate::reader::{content_lines, fields, parse_value};
use crate::{Error, EuclideanDistanceMatrix, Result, Value};
use std::io::BufRead;

/// Read one point per non-blank line
///
/// Every point must have the dimension of the first one; a mismatch aborts
/// the parse with the offending line number.
pub fn read_point_cloud<R: BufRead>(reader: R) -> Result<EuclideanDistanceMatrix> {
    let mut points: Vec<Vec<Value>> = Vec::new();

    for entry in content_lines(reader) {
        let (line_number, line) = entry?;
        let point = fields(&line)
            .map(|token| parse_value(token, line_number))
            .collect::<Result<Vec<_>>>()?;

        if let Some(first) = points.first() {
            if point.len() != first.len() {
                return Err(Error::DimensionMismatch {
                    line: line_number,
                    expected: first.len(),
                    found: point.len(),
                });
            }
        }
        points.push(point);
    }

    let cloud = EuclideanDistanceMatrix::new(points)?;
    tracing::debug!(
        points = cloud.points().len(),
        dimension = cloud.dimension(),
        "read point cloud"
    );
    Ok(cloud)
}
