//! Packaging of rendered output into the caller-facing bundle.

use index_common::BoundingBox;
use index_engine::Statistics;

/// Everything returned for one successful index request.
#[derive(Debug, Clone)]
pub struct ResponseBundle {
    /// Classified index image, PNG.
    pub image: Vec<u8>,
    /// Legend strip, PNG.
    pub colorbar: Vec<u8>,
    /// Requested box as `[south, west, north, east]`.
    pub bounds: [f64; 4],
    /// `None` when the index grid holds no valid values.
    pub stats: Option<Statistics>,
    /// Upper-case index name.
    pub index_name: String,
}

/// Assemble a bundle, reordering `bbox` and upper-casing `index_name`.
pub fn package(
    image: Vec<u8>,
    colorbar: Vec<u8>,
    bbox: &BoundingBox,
    stats: Option<Statistics>,
    index_name: &str,
) -> ResponseBundle {
    ResponseBundle {
        image,
        colorbar,
        bounds: bbox.to_response_bounds(),
        stats,
        index_name: index_name.to_uppercase(),
    }
}
