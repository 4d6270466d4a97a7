//! The index request pipeline.

use std::collections::BTreeMap;

use band_store::{align, clip, BandStore};
use index_common::{BandRole, BoundingBox, Grid, IndexResult};
use index_engine::{BandSet, SpectralIndex};
use tracing::{debug, info, warn};

use crate::bundle::{package, ResponseBundle};

/// Computes spectral indices over a fixed band configuration.
///
/// Holds only read-only configuration, so one instance can serve
/// concurrent requests; every call opens and closes its own rasters.
#[derive(Debug, Clone)]
pub struct IndexService {
    store: BandStore,
}

impl IndexService {
    pub fn new(store: BandStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &BandStore {
        &self.store
    }

    /// Run the full pipeline for one request.
    pub fn compute(&self, index_name: &str, bbox: &BoundingBox) -> IndexResult<ResponseBundle> {
        let index: SpectralIndex = index_name.parse()?;
        bbox.validate()?;

        let bands = self.load_bands(index, bbox)?;
        let grid = index.evaluate(&bands);
        let rendered = renderer::render(&grid)?;

        match rendered.stats {
            Some(stats) => info!("{}: min={:.4}, max={:.4}", index, stats.min, stats.max),
            None => info!("{}: no valid pixels", index),
        }

        Ok(package(
            rendered.image,
            rendered.colorbar,
            bbox,
            rendered.stats,
            index.name(),
        ))
    }

    /// Clip, normalize and align every band `index` can use.
    fn load_bands(&self, index: SpectralIndex, bbox: &BoundingBox) -> IndexResult<BandSet> {
        let mut grids: BTreeMap<BandRole, Grid> = BTreeMap::new();

        for role in BandRole::MANDATORY {
            let source = self.store.require_role(role)?;
            let band = clip(&source, bbox)?.normalize();
            grids.insert(role, band.grid);
        }

        for &role in index.optional_roles() {
            let Some(source) = self.store.resolve_role(role) else {
                info!(index = %index, role = %role, "Optional band unavailable, using fallback");
                continue;
            };
            match clip(&source, bbox) {
                Ok(band) => {
                    grids.insert(role, band.normalize().grid);
                }
                Err(e) => {
                    warn!(
                        index = %index,
                        role = %role,
                        band = %source.code,
                        error = %e,
                        "Optional band could not be clipped, using fallback"
                    );
                }
            }
        }

        let aligned = align(grids);
        let bands = BandSet::from_roles(aligned)?;
        debug!(index = %index, shape = ?bands.shape(), "Bands aligned");
        Ok(bands)
    }
}
