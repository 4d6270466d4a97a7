//! Common types shared across the spectral index crates and services.

pub mod band;
pub mod bbox;
pub mod error;
pub mod grid;

pub use band::BandRole;
pub use bbox::BoundingBox;
pub use error::{IndexError, IndexResult};
pub use grid::Grid;
