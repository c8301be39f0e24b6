//! Abstract interfaces for distance matrix input
//!
//! This module defines the capability traits shared by every representation
//! and the element trait for binary-decoded scalars.

pub mod element;
pub mod matrix;

pub use element::{BinaryValue, Endianness};
pub use matrix::{DistanceMatrix, IndexDiameter, NeighborAccess};
