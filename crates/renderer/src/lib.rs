//! Image rendering for spectral index grids.
//!
//! Implements:
//! - Five-class classification of index values with a reserved no-data slot
//! - Indexed/RGBA PNG encoding
//! - The fixed legend strip with TrueType tick labels

pub mod classify;
pub mod error;
pub mod legend;
pub mod png;
pub mod render;

pub use classify::{class_index, classify, ClassifiedImage, IndexClass, CLASSES, NO_DATA_INDEX, PALETTE};
pub use error::{RenderError, Result};
pub use legend::{render_legend, render_legend_png};
pub use render::{render, RenderedIndex};
