//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// Boxed cause carried by the generation errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The Global Error Enum.
///
/// Failures raised by collaborators (model sources, the filesystem, JSON
/// serialization) are folded into `SchemaGeneration` or `FileGeneration` at the
/// public boundary. The original failure stays reachable through `source()`.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The introspection handle is missing or malformed.
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Configuration(String),

    /// Mapping models to component schemas failed.
    #[from(ignore)]
    #[display("Failed to generate schemas.")]
    SchemaGeneration {
        /// Underlying introspection failure.
        source: BoxError,
    },

    /// Creating the output directory or writing the document failed.
    #[from(ignore)]
    #[display("Failed to generate Swagger file {path:?}.")]
    FileGeneration {
        /// Destination the write was aimed at.
        path: PathBuf,
        /// Underlying I/O or serialization failure.
        source: BoxError,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// Wraps an introspection failure.
    pub fn schema_generation(cause: impl Into<BoxError>) -> Self {
        Self::SchemaGeneration {
            source: cause.into(),
        }
    }

    /// Wraps a directory-creation, serialization or write failure for `path`.
    pub fn file_generation(path: impl Into<PathBuf>, cause: impl Into<BoxError>) -> Self {
        Self::FileGeneration {
            path: path.into(),
            source: cause.into(),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::SchemaGeneration { source } | Self::FileGeneration { source, .. } => {
                Some(&**source)
            }
            Self::Configuration(_) | Self::General(_) => None,
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String must land in General, never Configuration
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_schema_generation_keeps_cause() {
        let cause = AppError::General("dmmf unavailable".into());
        let err = AppError::schema_generation(cause);

        assert_eq!(err.to_string(), "Failed to generate schemas.");
        let source = err.source().expect("cause should be chained");
        assert_eq!(source.to_string(), "General Error: dmmf unavailable");
    }

    #[test]
    fn test_file_generation_keeps_cause() {
        let io_err = Error::new(ErrorKind::PermissionDenied, "read-only fs");
        let err = AppError::file_generation("out/swagger.json", io_err);

        assert!(err.to_string().starts_with("Failed to generate Swagger file"));
        assert!(err.to_string().contains("swagger.json"));
        assert_eq!(err.source().unwrap().to_string(), "read-only fs");
    }

    #[test]
    fn test_configuration_manual_creation() {
        let err = AppError::Configuration("no models".into());
        assert_eq!(format!("{}", err), "Configuration Error: no models");
        assert!(err.source().is_none());
    }
}
