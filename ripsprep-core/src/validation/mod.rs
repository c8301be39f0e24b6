//! Pure validation and parsing utilities
//!
//! This module contains the index arithmetic of the compressed triangular
//! layouts and the token classifier used by the text parsers. No I/O.

pub mod layout;
pub mod parsing;

pub use layout::{lower_offset, triangle_len, upper_offset, vertex_count};
pub use parsing::ScalarToken;
