//! Error types for band access and clipping.

use index_common::IndexError;
use thiserror::Error;

/// Errors that can occur while resolving, reading or clipping a band.
#[derive(Error, Debug)]
pub enum BandStoreError {
    /// No path is configured for the band code.
    #[error("band {0} is not configured")]
    NotConfigured(String),

    /// The configured file does not exist.
    #[error("band {code} not found at {path}")]
    MissingFile { code: String, path: String },

    /// The configured file could not be opened.
    #[error("failed to open {path}: {message}")]
    OpenFailed { path: String, message: String },

    /// The file opened but could not be decoded as a TIFF.
    #[error("failed to decode raster: {0}")]
    Decode(String),

    /// Georeferencing tags are missing or unusable.
    #[error("invalid georeferencing: {0}")]
    Georeference(String),

    /// Sample layout we cannot read.
    #[error("unsupported raster format: {0}")]
    UnsupportedFormat(String),

    /// The requested box does not overlap the raster extent.
    #[error("requested region {requested} does not intersect raster extent {extent}")]
    NoIntersection { requested: String, extent: String },

    /// The box overlaps the raster but covers no pixel center.
    #[error("clip of {0} contains no pixels")]
    EmptyClip(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl BandStoreError {
    /// Create an OpenFailed error.
    pub fn open_failed(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::OpenFailed {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a NoIntersection error.
    pub fn no_intersection(requested: impl Into<String>, extent: impl Into<String>) -> Self {
        Self::NoIntersection {
            requested: requested.into(),
            extent: extent.into(),
        }
    }
}

impl From<tiff::TiffError> for BandStoreError {
    fn from(err: tiff::TiffError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<std::io::Error> for BandStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<serde_yaml::Error> for BandStoreError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<BandStoreError> for IndexError {
    fn from(err: BandStoreError) -> Self {
        match err {
            BandStoreError::NotConfigured(_) | BandStoreError::MissingFile { .. } => {
                IndexError::MissingBand(err.to_string())
            }
            BandStoreError::NoIntersection { .. } | BandStoreError::EmptyClip(_) => {
                IndexError::Geometry(err.to_string())
            }
            _ => IndexError::DataAccess(err.to_string()),
        }
    }
}

/// Result type for band store operations.
pub type Result<T> = std::result::Result<T, BandStoreError>;
