//! Contract with the external homology engine
//!
//! The engine consumes one matrix plus `(dim_max, threshold, modulus,
//! num_threads)` and owns that matrix for the duration of the call. This
//! crate never computes barcodes; it only builds the invocation.

use crate::{MatrixRepr, PrepConfig, Value};
use std::num::NonZeroUsize;

/// Scalar parameters of one engine run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineParams {
    /// Maximum homology dimension
    pub dim_max: usize,
    /// Effective threshold, never the raw user value on the unbounded path
    pub threshold: Value,
    /// Coefficient field modulus
    pub modulus: u16,
    /// Worker count, already resolved (never 0)
    pub num_threads: usize,
}

impl EngineParams {
    /// Parameters from `config` with the given effective threshold
    pub fn new(config: &PrepConfig, threshold: Value) -> Self {
        Self {
            dim_max: config.dim_max,
            threshold,
            modulus: config.modulus,
            num_threads: resolve_num_threads(config.num_threads),
        }
    }
}

/// Resolve a requested worker count, 0 meaning one per available core
pub fn resolve_num_threads(requested: usize) -> usize {
    if requested != 0 {
        return requested;
    }
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// External persistent homology engine
pub trait HomologyEngine {
    /// Barcode collection produced by one run
    type Barcodes;
    /// Engine failure
    type Error;

    /// Compute barcodes; the engine owns `matrix` and may mutate it freely
    fn compute(
        &mut self,
        matrix: MatrixRepr,
        params: &EngineParams,
    ) -> Result<Self::Barcodes, Self::Error>;
}

/// A matrix and its parameters, ready to hand to an engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineInvocation {
    pub matrix: MatrixRepr,
    pub params: EngineParams,
}

impl EngineInvocation {
    /// Hand the matrix over to `engine`
    pub fn run<E: HomologyEngine>(self, engine: &mut E) -> Result<E::Barcodes, E::Error> {
        engine.compute(self.matrix, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_resolution() {
        assert_eq!(resolve_num_threads(3), 3);
        assert!(resolve_num_threads(0) >= 1);
    }

    #[test]
    fn test_params_from_config() {
        let config = PrepConfig::default().with_dim_max(2).with_modulus(5).with_num_threads(8);
        let params = EngineParams::new(&config, 1.25);
        assert_eq!(
            params,
            EngineParams {
                dim_max: 2,
                threshold: 1.25,
                modulus: 5,
                num_threads: 8
            }
        );
    }
}
