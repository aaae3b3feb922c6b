//! Error types for the neck posture library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// The landmark provider found no person in the image
    #[error("No pose detected")]
    NoPoseDetected,

    /// A person was found but neither ear/shoulder pair is visible enough
    #[error("No clear view of neck angle")]
    NoReliableSide,

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding failed
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// Response serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `ONNX` Runtime inference failed
    #[error("ONNX Runtime error: {0}")]
    OnnxRuntime(#[from] ort::OrtError),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model input configuration error
    #[error("Model input error: {0}")]
    ModelInputError(String),

    /// Model output processing error
    #[error("Model output error: {0}")]
    ModelOutputError(String),

    /// Model data shape or format error
    #[error("Model data format error: {0}")]
    ModelDataFormatError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Whether the error is scoped to a single request (bad image, no pose,
    /// occluded view) rather than a failure of the model or environment.
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::NoPoseDetected | Self::NoReliableSide | Self::Image(_) | Self::InvalidInput(_)
        )
    }
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_messages() {
        assert_eq!(Error::NoPoseDetected.to_string(), "No pose detected");
        assert_eq!(Error::NoReliableSide.to_string(), "No clear view of neck angle");
    }

    #[test]
    fn test_request_error_classification() {
        assert!(Error::NoPoseDetected.is_request_error());
        assert!(Error::NoReliableSide.is_request_error());
        assert!(Error::InvalidInput("empty".to_string()).is_request_error());
        assert!(!Error::ConfigError("bad".to_string()).is_request_error());
        assert!(!Error::ModelOutputError("short".to_string()).is_request_error());
    }
}
