//! Min/max statistics over an index grid.

use serde::{Deserialize, Serialize};

/// Range of the valid (non-NaN) values of an index grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub min: f32,
    pub max: f32,
    /// Number of non-NaN samples the range was computed from.
    #[serde(skip_serializing)]
    #[serde(default)]
    pub valid_count: usize,
}

impl Statistics {
    /// Min and max of the non-NaN values, or `None` if there are none.
    pub fn from_values(values: &[f32]) -> Option<Self> {
        let mut valid = values.iter().copied().filter(|v| !v.is_nan());
        let first = valid.next()?;

        let (min, max, count) = valid.fold((first, first, 1usize), |(min, max, n), v| {
            (min.min(v), max.max(v), n + 1)
        });

        Some(Self {
            min,
            max,
            valid_count: count,
        })
    }
}
