//! Index grid to encoded images.

use index_common::Grid;
use index_engine::Statistics;
use tracing::debug;

use crate::classify::classify;
use crate::error::{RenderError, Result};
use crate::legend::render_legend_png;
use crate::png::create_png_classified;

/// Encoded output for one index grid.
#[derive(Debug, Clone)]
pub struct RenderedIndex {
    /// Classified image, PNG.
    pub image: Vec<u8>,
    /// Legend strip, PNG.
    pub colorbar: Vec<u8>,
    /// `None` when every value is NaN.
    pub stats: Option<Statistics>,
    pub width: usize,
    pub height: usize,
}

/// Classify, encode and summarize an index grid.
pub fn render(grid: &Grid) -> Result<RenderedIndex> {
    if grid.is_empty() {
        return Err(RenderError::EmptyGrid {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let classified = classify(grid);
    let image = create_png_classified(&classified)?;
    let colorbar = render_legend_png()?;
    let stats = Statistics::from_values(grid.data());

    debug!(
        width = grid.width(),
        height = grid.height(),
        histogram = ?classified.histogram(),
        image_bytes = image.len(),
        "Rendered index image"
    );

    Ok(RenderedIndex {
        image,
        colorbar,
        stats,
        width: grid.width(),
        height: grid.height(),
    })
}
