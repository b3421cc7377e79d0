//! Error types for the fishing spots services.
//!
//! The store and the marker handle map never fail; these errors arise at the
//! HTTP edge and when seed spots are loaded.

use thiserror::Error;

/// Primary error type for API operations.
#[derive(Debug, Error)]
pub enum SpotError {
    #[error("Map view not found: {0}")]
    ViewNotFound(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },
}

impl SpotError {
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        SpotError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            SpotError::ViewNotFound(_) => "ViewNotFound",
            SpotError::InvalidParameter { .. } => "InvalidParameter",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            SpotError::ViewNotFound(_) => 404,
            SpotError::InvalidParameter { .. } => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(SpotError::ViewNotFound("x".to_string()).http_status_code(), 404);
        assert_eq!(
            SpotError::invalid_parameter("latitude", "out of range").http_status_code(),
            400
        );
    }

    #[test]
    fn test_error_display() {
        let err = SpotError::invalid_parameter("latitude", "must be within [-90, 90]");
        let display = err.to_string();
        assert!(display.contains("'latitude'"));
        assert!(display.contains("[-90, 90]"));
        assert_eq!(err.error_code(), "InvalidParameter");
    }
}
