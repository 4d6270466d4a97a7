//! Band alignment by top-left truncation.
//!
//! Independently clipped bands can differ by a pixel or two in either
//! dimension. All rasters are assumed to share resolution and grid origin, so
//! alignment keeps the shared top-left window and drops excess rows from the
//! bottom and excess columns from the right. No resampling or center
//! cropping is performed.

use std::collections::BTreeMap;

use index_common::Grid;
use tracing::debug;

/// Minimum `(rows, cols)` across all grids, or `None` for no grids.
pub fn common_shape<'a, I>(grids: I) -> Option<(usize, usize)>
where
    I: IntoIterator<Item = &'a Grid>,
{
    grids.into_iter().fold(None, |acc, grid| {
        let (rows, cols) = grid.shape();
        Some(match acc {
            None => (rows, cols),
            Some((r, c)) => (r.min(rows), c.min(cols)),
        })
    })
}

/// Truncate every grid to the minimum shared shape.
///
/// After this call all grids in the map have identical shape.
pub fn align<K>(bands: BTreeMap<K, Grid>) -> BTreeMap<K, Grid>
where
    K: Ord + std::fmt::Debug,
{
    let Some((rows, cols)) = common_shape(bands.values()) else {
        return bands;
    };

    bands
        .into_iter()
        .map(|(key, grid)| {
            if grid.shape() != (rows, cols) {
                debug!(
                    band = ?key,
                    from = ?grid.shape(),
                    to = ?(rows, cols),
                    "Truncating band to common shape"
                );
                (key, grid.truncate(rows, cols))
            } else {
                (key, grid)
            }
        })
        .collect()
}
