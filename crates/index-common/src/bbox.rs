//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// An axis-aligned geographic rectangle.
///
/// Coordinates are in the CRS of the band rasters (degrees for EPSG:4326).
/// Construction through [`BoundingBox::try_new`] or [`BoundingBox::from_array`]
/// enforces `west < east` and `south < north`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Create a bounding box without validating the corner ordering.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Create a bounding box, rejecting non-finite or inverted coordinates.
    pub fn try_new(west: f64, south: f64, east: f64, north: f64) -> Result<Self, IndexError> {
        let bbox = Self::new(west, south, east, north);
        bbox.validate()?;
        Ok(bbox)
    }

    /// Build from the request ordering `[west, south, east, north]`.
    pub fn from_array(coords: [f64; 4]) -> Result<Self, IndexError> {
        Self::try_new(coords[0], coords[1], coords[2], coords[3])
    }

    /// Build from a request slice, which must hold exactly four values.
    pub fn from_slice(coords: &[f64]) -> Result<Self, IndexError> {
        match coords {
            [west, south, east, north] => Self::try_new(*west, *south, *east, *north),
            _ => Err(IndexError::InvalidBbox(format!(
                "expected 4 coordinates [west, south, east, north], got {}",
                coords.len()
            ))),
        }
    }

    /// Check the `west < east`, `south < north` invariant.
    pub fn validate(&self) -> Result<(), IndexError> {
        let coords = [self.west, self.south, self.east, self.north];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(IndexError::InvalidBbox(format!(
                "coordinates must be finite: {:?}",
                coords
            )));
        }
        if self.west >= self.east {
            return Err(IndexError::InvalidBbox(format!(
                "west ({}) must be less than east ({})",
                self.west, self.east
            )));
        }
        if self.south >= self.north {
            return Err(IndexError::InvalidBbox(format!(
                "south ({}) must be less than north ({})",
                self.south, self.north
            )));
        }
        Ok(())
    }

    /// Bounds in the response ordering `[south, west, north, east]`.
    pub fn to_response_bounds(&self) -> [f64; 4] {
        [self.south, self.west, self.north, self.east]
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Check if this bbox intersects another with a non-zero area.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.west < other.east
            && self.east > other.west
            && self.south < other.north
            && self.north > other.south
    }

    /// Compute the intersection of two bounding boxes.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if !self.intersects(other) {
            return None;
        }

        Some(BoundingBox {
            west: self.west.max(other.west),
            south: self.south.max(other.south),
            east: self.east.min(other.east),
            north: self.north.min(other.north),
        })
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.west, self.south, self.east, self.north
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_array_keeps_request_order() {
        let bbox = BoundingBox::from_array([10.0, 50.0, 10.1, 50.1]).unwrap();
        assert_eq!(bbox.west, 10.0);
        assert_eq!(bbox.south, 50.0);
        assert_eq!(bbox.east, 10.1);
        assert_eq!(bbox.north, 50.1);
    }

    #[test]
    fn test_response_bounds_reordered() {
        let bbox = BoundingBox::new(10.0, 50.0, 10.1, 50.1);
        assert_eq!(bbox.to_response_bounds(), [50.0, 10.0, 50.1, 10.1]);
    }

    #[test]
    fn test_intersection() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        let c = BoundingBox::new(20.0, 20.0, 30.0, 30.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));

        let intersection = a.intersection(&b).unwrap();
        assert_eq!(intersection, BoundingBox::new(5.0, 5.0, 10.0, 10.0));
    }
}
