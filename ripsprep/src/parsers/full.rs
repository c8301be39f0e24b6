//! Full square distance matrix
//!
//! Row `i` contributes only its first `i` entries. The redundant upper half
//! is assumed to mirror the lower half and is not read unless symmetry
//! verification is requested.

use crate::reader::{content_lines, fields, parse_value};
use crate::{CompressedLowerDistanceMatrix, DistanceMatrix, Error, Result, Value};
use std::io::BufRead;

/// Read a full matrix, keeping the strictly lower entries of each row
///
/// With `verify_symmetry` the entries right of the diagonal are parsed too
/// and must equal their mirrored lower entries.
pub fn read_distance_matrix<R: BufRead>(
    reader: R,
    verify_symmetry: bool,
) -> Result<CompressedLowerDistanceMatrix> {
    let mut distances = Vec::new();
    let mut upper: Vec<(usize, usize, Value)> = Vec::new();

    for (row, entry) in content_lines(reader).enumerate() {
        let (line_number, line) = entry?;
        for (col, token) in fields(&line).enumerate() {
            if col < row {
                distances.push(parse_value(token, line_number)?);
            } else if !verify_symmetry {
                break;
            } else if col > row {
                upper.push((row, col, parse_value(token, line_number)?));
            }
        }
    }

    let matrix = CompressedLowerDistanceMatrix::from_distances(distances);
    for (row, col, value) in upper {
        if col >= matrix.size() {
            continue;
        }
        let mirrored = matrix.distance(col, row);
        let same = mirrored == value || (mirrored.is_nan() && value.is_nan());
        if !same {
            return Err(Error::Asymmetric { row, col });
        }
    }

    tracing::debug!(vertices = matrix.size(), verify_symmetry, "read full distance matrix");
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "0 1 2 3\n1 0 4 5\n2 4 0 6\n3 5 6 0\n";

    #[test]
    fn test_keeps_lower_half() {
        let matrix = read_distance_matrix(SQUARE.as_bytes(), false).unwrap();
        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.distances(), &[1.0, 2.0, 4.0, 3.0, 5.0, 6.0]);
    }

    #[test]
    fn test_upper_half_ignored_by_default() {
        let skewed = "0 9 9 9\n1 0 9 9\n2 4 0 9\n3 5 6 0\n";
        let matrix = read_distance_matrix(skewed.as_bytes(), false).unwrap();
        assert_eq!(matrix, read_distance_matrix(SQUARE.as_bytes(), false).unwrap());

        // Garbage past the diagonal is never parsed
        let matrix = read_distance_matrix("0 x\n1 0\n".as_bytes(), false).unwrap();
        assert_eq!(matrix.distances(), &[1.0]);
    }

    #[test]
    fn test_verify_symmetry() {
        assert!(read_distance_matrix(SQUARE.as_bytes(), true).is_ok());

        let skewed = "0 1 2\n1 0 7\n2 4 0\n";
        let err = read_distance_matrix(skewed.as_bytes(), true).unwrap_err();
        assert!(matches!(err, Error::Asymmetric { row: 1, col: 2 }));
    }

    #[test]
    fn test_blank_lines_do_not_count_as_rows() {
        let matrix = read_distance_matrix("0 1\n\n1 0\n".as_bytes(), false).unwrap();
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.distances(), &[1.0]);
    }
}
