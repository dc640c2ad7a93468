//! Import errors

use thiserror::Error;

/// Result type alias using `ImportError`
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors from local audio discovery
#[derive(Debug, Error)]
pub enum ImportError {
    /// Scan root does not exist
    #[error("Scan root not found: {0}")]
    RootNotFound(String),

    /// Scan root is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Media access was refused
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Other I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ImportError> for stride_core::StrideError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::PermissionDenied(_) => stride_core::StrideError::PermissionDenied,
            ImportError::RootNotFound(path) => {
                stride_core::StrideError::not_found("Scan root", path)
            }
            ImportError::NotADirectory(path) => stride_core::StrideError::invalid_input(path),
            ImportError::Io(e) => stride_core::StrideError::Io(e),
        }
    }
}
