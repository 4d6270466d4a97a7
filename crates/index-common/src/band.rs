//! Semantic band roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The spectral role a band plays in an index formula.
///
/// `Red` and `Nir` are mandatory for every index; the others are optional and
/// only improve the formulas that can use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandRole {
    Blue,
    Green,
    Red,
    Nir,
    Swir,
}

impl BandRole {
    /// Every role, in spectral order.
    pub const ALL: [BandRole; 5] = [
        BandRole::Blue,
        BandRole::Green,
        BandRole::Red,
        BandRole::Nir,
        BandRole::Swir,
    ];

    /// Roles that must be present for any index.
    pub const MANDATORY: [BandRole; 2] = [BandRole::Red, BandRole::Nir];

    pub fn is_mandatory(&self) -> bool {
        matches!(self, BandRole::Red | BandRole::Nir)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BandRole::Blue => "blue",
            BandRole::Green => "green",
            BandRole::Red => "red",
            BandRole::Nir => "nir",
            BandRole::Swir => "swir",
        }
    }

    /// Sentinel-2 band code conventionally bound to this role.
    pub fn sentinel2_code(&self) -> &'static str {
        match self {
            BandRole::Blue => "B02",
            BandRole::Green => "B03",
            BandRole::Red => "B04",
            BandRole::Nir => "B08",
            BandRole::Swir => "B11",
        }
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BandRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blue" => Ok(BandRole::Blue),
            "green" => Ok(BandRole::Green),
            "red" => Ok(BandRole::Red),
            "nir" => Ok(BandRole::Nir),
            "swir" => Ok(BandRole::Swir),
            other => Err(format!("unknown band role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_roles() {
        for role in BandRole::ALL {
            assert_eq!(role.is_mandatory(), BandRole::MANDATORY.contains(&role));
        }
    }

    #[test]
    fn test_parse_roundtrip_names() {
        for role in BandRole::ALL {
            assert_eq!(role.as_str().parse::<BandRole>().unwrap(), role);
        }
        assert!("thermal".parse::<BandRole>().is_err());
    }

    #[test]
    fn test_sentinel2_codes() {
        assert_eq!(BandRole::Red.sentinel2_code(), "B04");
        assert_eq!(BandRole::Nir.sentinel2_code(), "B08");
        assert_eq!(BandRole::Swir.sentinel2_code(), "B11");
    }
}
