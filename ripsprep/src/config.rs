//! Preparation configuration
//!
//! Mirrors the knobs of a Rips run: input format, maximum homology
//! dimension, user threshold, coefficient modulus and worker count, plus the
//! reader policies this crate decides on its own.

use crate::reader::ShortReadPolicy;
use crate::{InputFormat, Value, UNBOUNDED};
#[cfg(feature = "serde")]
use crate::{Error, Result};
#[cfg(feature = "serde")]
use std::path::Path;

/// Configuration for one preparation run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PrepConfig {
    /// Shape of the input, chosen by the caller
    pub format: InputFormat,
    /// Maximum homology dimension computed by the engine
    pub dim_max: usize,
    /// User threshold, [`UNBOUNDED`] when unset
    pub threshold: Value,
    /// Coefficient field modulus for the engine
    pub modulus: u16,
    /// Engine worker count, 0 for one per available core
    pub num_threads: usize,
    /// What a truncated binary value turns into
    pub short_read: ShortReadPolicy,
    /// Check the discarded upper half of full matrices
    pub verify_symmetry: bool,
}

impl PrepConfig {
    /// Set the input format
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the maximum homology dimension
    pub fn with_dim_max(mut self, dim_max: usize) -> Self {
        self.dim_max = dim_max;
        self
    }

    /// Set the user threshold
    pub fn with_threshold(mut self, threshold: Value) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the coefficient modulus
    pub fn with_modulus(mut self, modulus: u16) -> Self {
        self.modulus = modulus;
        self
    }

    /// Set the engine worker count
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Set the short binary read policy
    pub fn with_short_read(mut self, policy: ShortReadPolicy) -> Self {
        self.short_read = policy;
        self
    }

    /// Enable or disable the full-matrix symmetry check
    pub fn with_verify_symmetry(mut self, verify: bool) -> Self {
        self.verify_symmetry = verify;
        self
    }

    /// Parse a JSON configuration; missing fields keep their defaults
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a JSON configuration file
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            format: InputFormat::LowerDistance,
            dim_max: 1,
            threshold: UNBOUNDED,
            modulus: 2,
            num_threads: 0,
            short_read: ShortReadPolicy::Fail,
            verify_symmetry: false,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_json_fills_defaults() {
        let config =
            PrepConfig::from_json_str(r#"{"format": "point-cloud", "threshold": 1.5}"#).unwrap();
        assert_eq!(config.format, InputFormat::PointCloud);
        assert_eq!(config.threshold, 1.5);
        assert_eq!(config.dim_max, 1);
        assert_eq!(config.modulus, 2);
        assert_eq!(config.short_read, ShortReadPolicy::Fail);
    }

    #[test]
    fn test_json_rejects_unknown_format() {
        let err = PrepConfig::from_json_str(r#"{"format": "csv"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = PrepConfig::default()
            .with_format(InputFormat::Dipha)
            .with_dim_max(3)
            .with_modulus(3)
            .with_num_threads(4)
            .with_short_read(ShortReadPolicy::ZeroFill)
            .with_verify_symmetry(true);
        assert_eq!(config.format, InputFormat::Dipha);
        assert_eq!(config.dim_max, 3);
        assert_eq!(config.modulus, 3);
        assert_eq!(config.num_threads, 4);
        assert_eq!(config.short_read, ShortReadPolicy::ZeroFill);
        assert!(config.verify_symmetry);
        assert_eq!(config.threshold, UNBOUNDED);
    }
}
