//! Error types for configuration and output operations
//!
//! The partitioning algorithm itself never fails once its parameters
//! validate; every variant here belongs to the parameter or I/O boundary.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Nothing to export because the layout holds no tiles
    EmptyLayout,

    /// Failed to save the preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to serialize a layout
    Serialization {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyLayout => write!(f, "Layout contains no tiles"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize layout to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::EmptyLayout => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a directory and all of its parents
///
/// # Errors
///
/// Returns a file system error naming the directory on failure
pub fn ensure_directory(path: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "create directory",
        source,
    })
}
