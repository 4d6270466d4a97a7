//! Role-keyed reflectance inputs for one index computation.

use std::collections::BTreeMap;

use index_common::{BandRole, Grid, IndexError, IndexResult};

/// Aligned, normalized reflectance grids keyed by role.
///
/// Red and NIR are always present. Optional roles are `None` when the band
/// could not be read; formulas substitute their documented fallback. Every
/// present grid has the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSet {
    pub red: Grid,
    pub nir: Grid,
    pub blue: Option<Grid>,
    pub green: Option<Grid>,
    pub swir: Option<Grid>,
}

impl BandSet {
    /// Build a set from the two mandatory bands.
    pub fn new(red: Grid, nir: Grid) -> IndexResult<Self> {
        let set = Self {
            red,
            nir,
            blue: None,
            green: None,
            swir: None,
        };
        set.check_shapes()?;
        Ok(set)
    }

    /// Build a set from a role map, as produced by the band aligner.
    ///
    /// Fails with [`IndexError::MissingBand`] if red or NIR is absent.
    pub fn from_roles(mut bands: BTreeMap<BandRole, Grid>) -> IndexResult<Self> {
        let red = bands
            .remove(&BandRole::Red)
            .ok_or_else(|| IndexError::MissingBand(BandRole::Red.to_string()))?;
        let nir = bands
            .remove(&BandRole::Nir)
            .ok_or_else(|| IndexError::MissingBand(BandRole::Nir.to_string()))?;

        let set = Self {
            red,
            nir,
            blue: bands.remove(&BandRole::Blue),
            green: bands.remove(&BandRole::Green),
            swir: bands.remove(&BandRole::Swir),
        };
        set.check_shapes()?;
        Ok(set)
    }

    pub fn with_blue(mut self, blue: Grid) -> IndexResult<Self> {
        self.blue = Some(blue);
        self.check_shapes()?;
        Ok(self)
    }

    pub fn with_green(mut self, green: Grid) -> IndexResult<Self> {
        self.green = Some(green);
        self.check_shapes()?;
        Ok(self)
    }

    pub fn with_swir(mut self, swir: Grid) -> IndexResult<Self> {
        self.swir = Some(swir);
        self.check_shapes()?;
        Ok(self)
    }

    /// Shape as `(rows, cols)`, shared by every band in the set.
    pub fn shape(&self) -> (usize, usize) {
        self.red.shape()
    }

    /// Grid for a role, if present.
    pub fn get(&self, role: BandRole) -> Option<&Grid> {
        match role {
            BandRole::Red => Some(&self.red),
            BandRole::Nir => Some(&self.nir),
            BandRole::Blue => self.blue.as_ref(),
            BandRole::Green => self.green.as_ref(),
            BandRole::Swir => self.swir.as_ref(),
        }
    }

    pub fn has(&self, role: BandRole) -> bool {
        self.get(role).is_some()
    }

    fn check_shapes(&self) -> IndexResult<()> {
        let expected = self.red.shape();
        for role in BandRole::ALL {
            if let Some(grid) = self.get(role) {
                if grid.shape() != expected {
                    return Err(IndexError::DataAccess(format!(
                        "band {} has shape {:?}, expected {:?}",
                        role,
                        grid.shape(),
                        expected
                    )));
                }
            }
        }
        Ok(())
    }
}
