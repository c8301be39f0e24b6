//! Binary scalar decoding
//!
//! Binary inputs are stored little-endian. The platform byte order is a
//! plain value handed to the decoder, computed once by the caller.

use crate::{Result, RipsError};

/// Byte order of the running platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the compilation target
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }
}

/// Types that can be decoded from little-endian binary input
pub trait BinaryValue: bytemuck::Pod {
    /// Width in bytes
    const WIDTH: usize = core::mem::size_of::<Self>();

    /// Decode one little-endian value from the front of `bytes`
    ///
    /// `platform` is the byte order of the running machine; bytes are
    /// reversed when it differs from the little-endian source.
    fn decode_le(bytes: &[u8], platform: Endianness) -> Result<Self> {
        if bytes.len() < Self::WIDTH {
            return Err(RipsError::ShortRead {
                expected: Self::WIDTH,
                found: bytes.len(),
            });
        }
        let mut value: Self = bytemuck::pod_read_unaligned(&bytes[..Self::WIDTH]);
        if platform == Endianness::Big {
            bytemuck::bytes_of_mut(&mut value).reverse();
        }
        Ok(value)
    }

    /// Zero value used when a short read is tolerated
    fn zero() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

impl BinaryValue for f32 {}
impl BinaryValue for f64 {}
impl BinaryValue for i64 {}
impl BinaryValue for u32 {}
