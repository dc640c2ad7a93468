//! Error types for transport control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Requested index is outside the active list
    #[error("Track index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// The active list has no tracks
    #[error("Track list is empty")]
    ListEmpty,

    /// Platform audio backend error
    #[error("Audio backend error: {0}")]
    Backend(#[from] stride_core::StrideError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
