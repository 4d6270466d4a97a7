//! Rendering errors.

use index_common::IndexError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    /// Nothing to draw.
    #[error("cannot render an empty {width}x{height} grid")]
    EmptyGrid { width: usize, height: usize },

    /// Pixel buffer length does not match the image size.
    #[error("buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// The embedded label font could not be parsed.
    #[error("failed to load legend font")]
    Font,

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Encode(err.to_string())
    }
}

impl From<RenderError> for IndexError {
    fn from(err: RenderError) -> Self {
        IndexError::Render(err.to_string())
    }
}
