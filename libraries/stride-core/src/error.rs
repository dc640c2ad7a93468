/// Core error types for Stride Player
use thiserror::Error;

/// Result type alias using `StrideError`
pub type Result<T> = std::result::Result<T, StrideError>;

/// Core error type for Stride Player
#[derive(Error, Debug)]
pub enum StrideError {
    /// Audio loading/playback errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Storage or media access refused
    #[error("Permission denied")]
    PermissionDenied,

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl StrideError {
    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
