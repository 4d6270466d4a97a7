//! Band Store, Spatial Clipper and Band Aligner.
//!
//! This crate owns everything between a band code and an aligned set of
//! reflectance grids:
//!
//! - **Configuration**: an immutable band code → file path table
//! - **Resolution**: lazily checks that a configured file exists
//! - **Clipping**: reads a single-band GeoTIFF and crops it to the pixels
//!   whose centers fall inside a bounding box
//! - **Alignment**: truncates independently clipped grids to a common shape
//!
//! # Architecture
//!
//! ```text
//! bbox + roles
//!      │
//!      ▼
//! BandStore::resolve_role(role) ──► BandSource (code, path)
//!      │
//!      ▼
//! clip(source, bbox) ──► ClippedBand (raw DN grid + window transform)
//!      │
//!      ▼
//! ClippedBand::normalize() ──► NormalizedBand (DN / 10000)
//!      │
//!      ▼
//! align(map of grids) ──► every grid has the minimum shared shape
//! ```

pub mod align;
pub mod clip;
pub mod config;
pub mod error;
pub mod geotiff;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use align::{align, common_shape};
pub use clip::{clip, clip_grid, pixel_window};
pub use config::BandStoreConfig;
pub use error::{BandStoreError, Result};
pub use geotiff::GeoTiffBand;
pub use store::{BandSource, BandStore};
pub use types::{ClippedBand, GeoTransform, NormalizedBand, PixelWindow, REFLECTANCE_SCALE};
