//! Error types for distance matrix input definitions

/// Errors raised by the allocation-free core definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RipsError {
    /// Token is neither a number nor a non-finite spelling
    InvalidToken,
    /// Point dimension differs from the first point
    DimensionMismatch { expected: usize, found: usize },
    /// Binary header is malformed
    InvalidHeader,
    /// Missing DIPHA magic number
    NotDipha,
    /// DIPHA file does not hold a distance matrix
    NotDiphaDistanceMatrix,
    /// Fewer bytes than one binary value needs
    ShortRead { expected: usize, found: usize },
    /// Index out of bounds
    IndexOutOfBounds,
    /// Unrecognized input format name
    UnknownFormat,
}

impl core::fmt::Display for RipsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RipsError::InvalidToken => write!(f, "Invalid numeric token"),
            RipsError::DimensionMismatch { expected, found } => {
                write!(f, "Point dimension mismatch: expected {expected}, found {found}")
            }
            RipsError::InvalidHeader => write!(f, "Invalid binary header"),
            RipsError::NotDipha => {
                write!(f, "Input is not a DIPHA file (magic number: 8067171840)")
            }
            RipsError::NotDiphaDistanceMatrix => {
                write!(f, "Input is not a DIPHA distance matrix (file type: 7)")
            }
            RipsError::ShortRead { expected, found } => {
                write!(f, "Short read: expected {expected} bytes, found {found}")
            }
            RipsError::IndexOutOfBounds => write!(f, "Index out of bounds"),
            RipsError::UnknownFormat => write!(f, "Unknown input format"),
        }
    }
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, RipsError>;

impl core::error::Error for RipsError {}
