//! Prepare a small point cloud twice, once unbounded and once with a user
//! threshold, and hand each result to a stand-in engine that only counts
//! the edges it would filter on.

use ripsprep::{
    prepare, read_matrix, DistanceMatrix, EngineParams, HomologyEngine, InputFormat, MatrixRepr,
    NeighborAccess, PrepConfig,
};

/// Counts the edges at or below the threshold it is given
struct EdgeCounter;

impl HomologyEngine for EdgeCounter {
    type Barcodes = usize;
    type Error = std::convert::Infallible;

    fn compute(&mut self, matrix: MatrixRepr, params: &EngineParams) -> Result<usize, Self::Error> {
        let edges = match &matrix {
            MatrixRepr::Dense(dense) => dense
                .distances()
                .iter()
                .filter(|&&d| d <= params.threshold)
                .count(),
            MatrixRepr::Sparse(sparse) => sparse.num_edges(),
        };
        Ok(edges)
    }
}

fn main() -> ripsprep::Result<()> {
    let points = "0 0\n1 0\n0 1\n1 1\n3 3\n";

    for threshold in [None, Some(1.2)] {
        let mut config = PrepConfig::default().with_format(InputFormat::PointCloud);
        if let Some(threshold) = threshold {
            config = config.with_threshold(threshold);
        }

        let prepared = prepare(read_matrix(points.as_bytes(), &config)?, &config);
        let edges = match prepared.run(&mut EdgeCounter) {
            Ok(edges) => edges,
            Err(never) => match never {},
        };

        println!(
            "{:?}: {:?} over {} points, threshold {}, {} edges",
            prepared.state(),
            prepared.representation(),
            prepared.matrix().size(),
            prepared.threshold(),
            edges
        );
    }
    Ok(())
}
