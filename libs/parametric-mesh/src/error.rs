//! # Mesh Errors
//!
//! Error types for mesh generation and export.

use std::path::PathBuf;

use config::ConfigError;
use thiserror::Error;

/// Errors that can occur while generating or writing a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A shape parameter is below its geometric minimum or not finite.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Face indices reference vertices or normals that do not exist.
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Generation configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The destination could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates an I/O error tagged with the path being written.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("segments must be at least 3: 2");
        assert!(err.to_string().contains("Invalid parameter"));
        assert!(err.to_string().contains("segments"));

        let err = MeshError::io(
            "/nope/out.obj",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/nope/out.obj"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidRings(0).into();
        assert!(matches!(err, MeshError::Config(ConfigError::InvalidRings(0))));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
