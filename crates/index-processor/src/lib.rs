//! Spectral index request pipeline.
//!
//! ```text
//! (index name, bbox)
//!     -> parse index            (fails before any raster I/O)
//!     -> resolve + clip bands   (mandatory: fatal, optional: degrade)
//!     -> normalize + align
//!     -> evaluate formula
//!     -> render image + legend
//!     -> ResponseBundle
//! ```

pub mod bundle;
pub mod service;

pub use bundle::{package, ResponseBundle};
pub use service::IndexService;
