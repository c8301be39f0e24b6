//! ripsprep - Distance Matrix Preparation for Vietoris-Rips Persistence
//!
//! This library turns loosely formatted dissimilarity data into the canonical
//! matrix a persistent homology engine consumes, and decides which
//! representation and threshold that engine should run with.
//!
//! ## Architecture
//!
//! - **ripsprep-core**: pure definitions, traits and index arithmetic (no I/O)
//! - **ripsprep**: readers, format parsers, matrix representations, the
//!   enclosing-radius calculator and the representation selector
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ripsprep::{InputFormat, PrepConfig};
//!
//! fn example() -> ripsprep::Result<()> {
//!     let config = PrepConfig::default()
//!         .with_format(InputFormat::PointCloud)
//!         .with_dim_max(2);
//!     let prepared = ripsprep::load(Some("points.txt".as_ref()), &config)?;
//!
//!     println!(
//!         "{} points, threshold {}",
//!         prepared.size(),
//!         prepared.params().threshold
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! raw bytes → scalar reader → format parser → canonical matrix →
//! enclosing radius (unbounded requests only) → selector → engine invocation

use std::path::Path;

// Re-export core abstractions and format definitions
pub use ripsprep_core::{
    // Core traits
    BinaryValue, DistanceMatrix, IndexDiameter, NeighborAccess,
    // Format definitions
    DiphaHeader, Endianness, InputFormat, ScalarToken,
    // Scalars
    is_unbounded, Index, Value, UNBOUNDED,
    // Core errors
    RipsError,
};

// Implementation modules
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod matrix;
pub mod parsers;
pub mod radius;
pub mod reader;
pub mod selector;

// Public exports
pub use config::PrepConfig;
pub use engine::{EngineInvocation, EngineParams, HomologyEngine};
pub use error::{Error, Result};
pub use input::InputSource;
pub use matrix::{
    CompressedLowerDistanceMatrix, EuclideanDistanceMatrix, MatrixRepr, SparseDistanceMatrix,
};
pub use parsers::{read_matrix, ParsedInput};
pub use radius::{enclosing_radius, EnclosingRadius, ValueRange};
pub use reader::{BinaryReader, ShortReadPolicy, TokenStream};
pub use selector::{prepare, select, PreparedInput, Representation, SelectionState, Summary};

/// Open `path` (or stdin when `None`), parse it and select a representation
///
/// Any parse-time error aborts the whole run; no partial matrix is returned.
pub fn load(path: Option<&Path>, config: &PrepConfig) -> Result<PreparedInput> {
    let source = InputSource::from_path_or_stdin(path)?;
    let input = read_matrix(source.as_bytes(), config)?;
    Ok(prepare(input, config))
}
