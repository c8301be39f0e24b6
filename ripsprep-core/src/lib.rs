#![no_std]

//! ripsprep core - Distance Matrix Input Definitions
//!
//! This crate provides the pure definitions shared by every Vietoris-Rips
//! input path: scalar and index types, input formats, the DIPHA header,
//! triangular layouts and the distance matrix capability traits. It performs
//! no I/O.

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;

/// Distance scalar stored by every representation
pub type Value = f32;

/// Vertex index
pub type Index = usize;

/// Threshold sentinel for "no user bound"
///
/// The largest finite value. An explicit `inf` threshold is a bound and
/// selects the sparse path.
pub const UNBOUNDED: Value = Value::MAX;

/// Returns true when `threshold` carries no user bound
pub fn is_unbounded(threshold: Value) -> bool {
    threshold == UNBOUNDED
}
