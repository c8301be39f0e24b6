//! Input sources
//!
//! A named file is memory mapped when the `mmap` feature is enabled and read
//! into memory otherwise. Standard input is always buffered. Either way the
//! parsers see one contiguous byte slice.

use crate::{Error, Result};
#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes of one input, owned for the duration of parsing
#[derive(Debug)]
pub enum InputSource {
    #[cfg(feature = "mmap")]
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl InputSource {
    /// Open the file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let open_error = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::open(path).map_err(open_error)?;

        #[cfg(feature = "mmap")]
        {
            // Zero-length files cannot be mapped on every platform
            if file.metadata()?.len() > 0 {
                // SAFETY: Read-only mapping; the file is not modified while parsing
                let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(open_error)?;
                tracing::debug!(path = %path.display(), bytes = mmap.len(), "mapped input");
                return Ok(InputSource::Mapped(mmap));
            }
        }

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");
        Ok(InputSource::Buffered(bytes))
    }

    /// Read all of standard input
    pub fn stdin() -> Result<Self> {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        tracing::debug!(bytes = bytes.len(), "read standard input");
        Ok(InputSource::Buffered(bytes))
    }

    /// Open `path`, or standard input when no path is given
    pub fn from_path_or_stdin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Self::stdin(),
        }
    }

    /// Wrap bytes already in memory
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        InputSource::Buffered(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            #[cfg(feature = "mmap")]
            InputSource::Mapped(mmap) => &mmap[..],
            InputSource::Buffered(bytes) => bytes.as_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ripsprep-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_open_reads_contents() {
        let path = temp_file("open", b"1 2 3\n");
        let source = InputSource::open(&path).unwrap();
        assert_eq!(source.as_bytes(), b"1 2 3\n");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_open_empty_file() {
        let path = temp_file("empty", b"");
        let source = InputSource::open(&path).unwrap();
        assert!(source.as_bytes().is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_names_path() {
        let path = std::env::temp_dir().join("ripsprep-does-not-exist/input.txt");
        let err = InputSource::open(&path).unwrap_err();
        assert!(matches!(err, Error::Open { path: ref p, .. } if *p == path));
        assert!(err.to_string().contains("couldn't open file"));
    }

    #[test]
    fn test_from_bytes() {
        let source = InputSource::from_bytes("0 1 2");
        assert_eq!(source.as_bytes(), b"0 1 2");
    }
}
