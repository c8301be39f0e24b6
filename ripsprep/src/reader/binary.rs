//! Fixed-width binary value reader
//!
//! Source data is little-endian. The platform byte order is supplied by the
//! caller (normally [`Endianness::native`], computed once at start-up).

use crate::{BinaryValue, Endianness, Result, RipsError};
use std::io::{ErrorKind, Read};

/// What a value cut short by the end of input turns into
///
/// `ZeroFill` returns the zero value for a truncated read, which silently
/// corrupts truncated files. `Fail` reports [`RipsError::ShortRead`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ShortReadPolicy {
    #[default]
    Fail,
    ZeroFill,
}

/// Reader of little-endian binary scalars
pub struct BinaryReader<R> {
    reader: R,
    platform: Endianness,
    policy: ShortReadPolicy,
}

impl<R: Read> BinaryReader<R> {
    pub fn new(reader: R, platform: Endianness, policy: ShortReadPolicy) -> Self {
        Self {
            reader,
            platform,
            policy,
        }
    }

    /// Read one value; any shortfall, including zero bytes, follows the policy
    pub fn read<T: BinaryValue>(&mut self) -> Result<T> {
        match self.read_or_end()? {
            Some(value) => Ok(value),
            None => self.short_read(0),
        }
    }

    /// Read one value, `None` when no byte at all remains
    ///
    /// A partial value follows the short-read policy.
    pub fn read_or_end<T: BinaryValue>(&mut self) -> Result<Option<T>> {
        let mut raw = T::zero();
        let filled = fill(&mut self.reader, bytemuck::bytes_of_mut(&mut raw))?;

        if filled == 0 {
            return Ok(None);
        }
        if filled < T::WIDTH {
            return self.short_read(filled).map(Some);
        }

        Ok(Some(T::decode_le(bytemuck::bytes_of(&raw), self.platform)?))
    }

    fn short_read<T: BinaryValue>(&self, found: usize) -> Result<T> {
        match self.policy {
            ShortReadPolicy::ZeroFill => Ok(T::zero()),
            ShortReadPolicy::Fail => Err(RipsError::ShortRead {
                expected: T::WIDTH,
                found,
            }
            .into()),
        }
    }
}

/// Read until `buf` is full or the input ends, returning the bytes read
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
