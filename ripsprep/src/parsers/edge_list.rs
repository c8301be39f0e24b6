//! Sparse edge-list parser
//!
//! Each non-blank line holds `i j weight`, separated by whitespace or
//! commas. Self-loops are dropped; adjacency lists are sorted once every
//! edge has been read.

use crate::reader::{content_lines, fields, parse_value};
use crate::{DistanceMatrix, Error, Index, NeighborAccess, Result, SparseDistanceMatrix, Value};
use std::io::BufRead;

fn parse_edge(line: &str, line_number: usize) -> Result<(Index, Index, Value)> {
    let mut tokens = fields(line);
    let malformed = || Error::MalformedEdge { line: line_number };

    // The vertex count is one past the largest index, so that must fit too
    let mut vertex = || {
        tokens
            .next()
            .and_then(|t| t.parse::<Index>().ok())
            .filter(|index| index.checked_add(1).is_some())
            .ok_or_else(malformed)
    };
    let i = vertex()?;
    let j = vertex()?;
    let weight = parse_value(tokens.next().ok_or_else(malformed)?, line_number)?;

    Ok((i, j, weight))
}

/// Read an undirected weighted edge list
pub fn read_sparse_distance_matrix<R: BufRead>(reader: R) -> Result<SparseDistanceMatrix> {
    let edges = content_lines(reader)
        .map(|entry| entry.and_then(|(line_number, line)| parse_edge(&line, line_number)))
        .collect::<Result<Vec<_>>>()?;

    let lines = edges.len();
    let matrix = SparseDistanceMatrix::from_edges(edges);
    tracing::debug!(
        lines,
        edges = matrix.num_edges(),
        vertices = matrix.size(),
        "read sparse edge list"
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_edges() {
        let input = "0 1 0.5\n1,2,1.5\n\n2 2 9\n0 3 inf\n";
        let matrix = read_sparse_distance_matrix(input.as_bytes()).unwrap();
        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.num_edges(), 3);
        assert_eq!(matrix.distance(2, 1), 1.5);
        assert_eq!(matrix.distance(3, 0), Value::INFINITY);
        assert_eq!(matrix.distance(2, 0), Value::INFINITY);
        assert!(matrix.neighbors(2).iter().all(|n| n.index != 2));
    }

    #[test]
    fn test_malformed_edges() {
        for input in ["0 1\n", "a 1 2.0\n", "0 -1 2.0\n", "0 1.5 2.0\n"] {
            let err = read_sparse_distance_matrix(input.as_bytes()).unwrap_err();
            assert!(matches!(err, Error::MalformedEdge { line: 1 }), "{input:?}");
        }

        let input = format!("0 1 1.0\n0 {} 1.0\n", Index::MAX);
        let err = read_sparse_distance_matrix(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedEdge { line: 2 }));

        let err = read_sparse_distance_matrix("0 1 2\n0 2 w\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidToken { line: 2, .. }));
    }
}
