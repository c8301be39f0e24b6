//! Input format definitions
//!
//! This module contains the pure data definitions for the supported input
//! shapes: the format selector itself, the DIPHA container header and the
//! binary constants. No I/O happens here.

pub mod constants;
pub mod dipha;
pub mod input;

pub use dipha::DiphaHeader;
pub use input::InputFormat;
