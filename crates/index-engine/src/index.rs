//! The closed set of supported indices and their evaluation.

use std::fmt;
use std::str::FromStr;

use index_common::{BandRole, Grid, IndexError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bands::BandSet;
use crate::formula::{self, clamp_index};

/// A supported spectral index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpectralIndex {
    /// Normalized Difference Vegetation Index.
    Ndvi,
    /// Normalized Difference Water Index (NIR/SWIR form).
    Ndwi,
    /// Enhanced Vegetation Index.
    Evi,
    /// Soil Adjusted Vegetation Index.
    Savi,
    /// Green Normalized Difference Vegetation Index.
    Gndvi,
}

impl SpectralIndex {
    pub const ALL: [SpectralIndex; 5] = [
        SpectralIndex::Ndvi,
        SpectralIndex::Ndwi,
        SpectralIndex::Evi,
        SpectralIndex::Savi,
        SpectralIndex::Gndvi,
    ];

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            SpectralIndex::Ndvi => "NDVI",
            SpectralIndex::Ndwi => "NDWI",
            SpectralIndex::Evi => "EVI",
            SpectralIndex::Savi => "SAVI",
            SpectralIndex::Gndvi => "GNDVI",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SpectralIndex::Ndvi => "Normalized Difference Vegetation Index",
            SpectralIndex::Ndwi => "Normalized Difference Water Index",
            SpectralIndex::Evi => "Enhanced Vegetation Index",
            SpectralIndex::Savi => "Soil Adjusted Vegetation Index",
            SpectralIndex::Gndvi => "Green Normalized Difference Vegetation Index",
        }
    }

    /// Optional roles this index reads when available.
    pub fn optional_roles(&self) -> &'static [BandRole] {
        match self {
            SpectralIndex::Ndvi | SpectralIndex::Savi => &[],
            SpectralIndex::Ndwi => &[BandRole::Swir],
            SpectralIndex::Evi => &[BandRole::Blue],
            SpectralIndex::Gndvi => &[BandRole::Green],
        }
    }

    /// Every role this index can use, mandatory first.
    pub fn roles(&self) -> Vec<BandRole> {
        let mut roles = BandRole::MANDATORY.to_vec();
        roles.extend_from_slice(self.optional_roles());
        roles
    }

    /// Raw formula value for one pixel, before clamping.
    ///
    /// `idx` indexes the row-major buffers of `bands`.
    #[inline]
    fn pixel(&self, bands: &BandSet, idx: usize) -> f32 {
        let red = bands.red.data()[idx];
        let nir = bands.nir.data()[idx];
        let optional = |grid: &Option<Grid>| grid.as_ref().map(|g| g.data()[idx]);

        match self {
            SpectralIndex::Ndvi => formula::ndvi(red, nir),
            SpectralIndex::Ndwi => formula::ndwi(red, nir, optional(&bands.swir)),
            SpectralIndex::Evi => formula::evi(red, nir, optional(&bands.blue)),
            SpectralIndex::Savi => formula::savi(red, nir),
            SpectralIndex::Gndvi => formula::gndvi(red, nir, optional(&bands.green)),
        }
    }

    /// Evaluate over every pixel and clamp the result to `[-1, 1]`.
    pub fn evaluate(&self, bands: &BandSet) -> Grid {
        let (rows, cols) = bands.shape();

        for role in self.optional_roles() {
            if !bands.has(*role) {
                debug!(index = self.name(), role = %role, "Optional band absent, using fallback");
            }
        }

        let mut out = Grid::filled(cols, rows, f32::NAN);
        out.data_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(|(idx, value)| *value = clamp_index(self.pixel(bands, idx)));
        out
    }
}

impl fmt::Display for SpectralIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpectralIndex {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpectralIndex::ALL
            .into_iter()
            .find(|index| index.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| IndexError::UnknownIndex(s.to_string()))
    }
}

/// Evaluate `index` over `bands`.
pub fn evaluate(index: SpectralIndex, bands: &BandSet) -> Grid {
    index.evaluate(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("ndvi".parse::<SpectralIndex>().unwrap(), SpectralIndex::Ndvi);
        assert_eq!("NDWI".parse::<SpectralIndex>().unwrap(), SpectralIndex::Ndwi);
        assert_eq!("Gndvi".parse::<SpectralIndex>().unwrap(), SpectralIndex::Gndvi);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "foo".parse::<SpectralIndex>().unwrap_err();
        assert!(matches!(err, IndexError::UnknownIndex(ref name) if name == "foo"));
        assert!("".parse::<SpectralIndex>().is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for index in SpectralIndex::ALL {
            assert_eq!(index.name().parse::<SpectralIndex>().unwrap(), index);
            assert_eq!(index.to_string(), index.name());
        }
    }

    #[test]
    fn test_optional_roles() {
        assert!(SpectralIndex::Ndvi.optional_roles().is_empty());
        assert!(SpectralIndex::Savi.optional_roles().is_empty());
        assert_eq!(SpectralIndex::Ndwi.optional_roles(), &[BandRole::Swir]);
        assert_eq!(SpectralIndex::Evi.optional_roles(), &[BandRole::Blue]);
        assert_eq!(SpectralIndex::Gndvi.optional_roles(), &[BandRole::Green]);
        assert_eq!(
            SpectralIndex::Evi.roles(),
            vec![BandRole::Red, BandRole::Nir, BandRole::Blue]
        );
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&SpectralIndex::Gndvi).unwrap();
        assert_eq!(json, "\"GNDVI\"");
    }
}
