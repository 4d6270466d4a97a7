//! Error types for spectral index computation.

use thiserror::Error;

/// Result type alias using IndexError.
pub type IndexResult<T> = Result<T, IndexError>;

/// Caller-facing error for an index request.
///
/// A request either produces a complete response bundle or exactly one of
/// these errors; partial images are never returned.
#[derive(Debug, Error)]
pub enum IndexError {
    // === Client Errors ===
    #[error("Unknown index: {0}")]
    UnknownIndex(String),

    #[error("Invalid BBOX: {0}")]
    InvalidBbox(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    // === Data Errors ===
    #[error("Missing mandatory band: {0}")]
    MissingBand(String),

    #[error("Data access error: {0}")]
    DataAccess(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    Render(String),
}

impl IndexError {
    /// Stable machine-readable code for error responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            IndexError::UnknownIndex(_) => "UnknownIndex",
            IndexError::InvalidBbox(_) => "InvalidBbox",
            IndexError::Geometry(_) => "GeometryError",
            IndexError::MissingBand(_) => "MissingBand",
            IndexError::DataAccess(_) => "DataAccessError",
            IndexError::Render(_) => "RenderError",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            IndexError::UnknownIndex(_)
            | IndexError::InvalidBbox(_)
            | IndexError::Geometry(_) => 400,

            IndexError::MissingBand(_) => 422,

            IndexError::DataAccess(_) | IndexError::Render(_) => 500,
        }
    }

    /// True when the caller sent something that can never succeed as-is.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(IndexError::UnknownIndex("foo".into()).http_status_code(), 400);
        assert_eq!(IndexError::Geometry("empty".into()).http_status_code(), 400);
        assert_eq!(IndexError::MissingBand("nir".into()).http_status_code(), 422);
        assert_eq!(IndexError::DataAccess("io".into()).http_status_code(), 500);
    }

    #[test]
    fn test_client_error_split() {
        assert!(IndexError::MissingBand("red".into()).is_client_error());
        assert!(!IndexError::DataAccess("unreadable".into()).is_client_error());
    }
}
