//! Input format selector
//!
//! The format is always chosen by the caller; nothing here inspects content.

use crate::RipsError;

/// Supported input shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputFormat {
    /// Row-major strictly lower triangle
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "lower-triangular", alias = "lower-distance"))]
    LowerDistance,
    /// Row-major strictly upper triangle
    #[cfg_attr(feature = "serde", serde(rename = "upper-triangular", alias = "upper-distance"))]
    UpperDistance,
    /// Full square matrix, only the lower half is read
    #[cfg_attr(feature = "serde", serde(rename = "full-matrix", alias = "distance"))]
    Distance,
    /// One point per line
    #[cfg_attr(feature = "serde", serde(rename = "point-cloud"))]
    PointCloud,
    /// DIPHA binary distance matrix
    #[cfg_attr(feature = "serde", serde(rename = "dipha-binary", alias = "dipha"))]
    Dipha,
    /// `i j weight` edge list
    #[cfg_attr(feature = "serde", serde(rename = "sparse-edge-list", alias = "sparse"))]
    Sparse,
    /// Raw little-endian f32 lower triangle
    #[cfg_attr(feature = "serde", serde(rename = "binary"))]
    Binary,
}

impl InputFormat {
    /// All formats
    pub const ALL: [InputFormat; 7] = [
        InputFormat::LowerDistance,
        InputFormat::UpperDistance,
        InputFormat::Distance,
        InputFormat::PointCloud,
        InputFormat::Dipha,
        InputFormat::Sparse,
        InputFormat::Binary,
    ];

    /// Name used on the command line and in configuration files
    pub const fn name(&self) -> &'static str {
        match self {
            InputFormat::LowerDistance => "lower-triangular",
            InputFormat::UpperDistance => "upper-triangular",
            InputFormat::Distance => "full-matrix",
            InputFormat::PointCloud => "point-cloud",
            InputFormat::Dipha => "dipha-binary",
            InputFormat::Sparse => "sparse-edge-list",
            InputFormat::Binary => "binary",
        }
    }

    /// Short names accepted alongside [`InputFormat::name`]
    pub const fn alias(&self) -> Option<&'static str> {
        match self {
            InputFormat::LowerDistance => Some("lower-distance"),
            InputFormat::UpperDistance => Some("upper-distance"),
            InputFormat::Distance => Some("distance"),
            InputFormat::Dipha => Some("dipha"),
            InputFormat::Sparse => Some("sparse"),
            InputFormat::PointCloud | InputFormat::Binary => None,
        }
    }

    /// Whether the input is a point cloud rather than a formed matrix
    pub const fn is_point_cloud(&self) -> bool {
        matches!(self, InputFormat::PointCloud)
    }
}

impl core::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for InputFormat {
    type Err = RipsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s || format.alias() == Some(s))
            .ok_or(RipsError::UnknownFormat)
    }
}
