//! Spectral index evaluation.
//!
//! An index is one of a closed set of formulas over normalized reflectance.
//! Inputs arrive as a [`BandSet`]: red and NIR are mandatory, blue, green and
//! SWIR are optional and each formula states its own fallback when one is
//! absent.
//!
//! ```text
//! BandSet { red, nir, blue?, green?, swir? }
//!        |
//!        v
//!   SpectralIndex::evaluate  (per-pixel formula, then clamp to [-1, 1])
//!        |
//!        v
//!   Grid of index values  ->  Statistics { min, max }
//! ```

pub mod bands;
pub mod formula;
pub mod index;
pub mod stats;

pub use bands::BandSet;
pub use formula::{clamp_index, EPSILON};
pub use index::{evaluate, SpectralIndex};
pub use stats::Statistics;
