//! Scalar readers
//!
//! Text inputs go through [`TokenStream`] and the line helpers; binary
//! inputs go through [`BinaryReader`], which decodes little-endian values
//! for an explicitly supplied platform byte order.

pub mod binary;
pub mod text;

pub use binary::{BinaryReader, ShortReadPolicy};
pub use text::{content_lines, fields, parse_value, ContentLines, TokenStream};
