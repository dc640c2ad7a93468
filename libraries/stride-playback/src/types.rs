//! Core types for transport control

use serde::{Deserialize, Serialize};
use stride_core::AudioSessionConfig;

/// Transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// Nothing loaded
    Idle,

    /// A track is loaded and playing
    Playing,

    /// A track is loaded and paused
    Paused,
}

/// Which of the two track lists navigation currently operates over.
///
/// Switching the selector never stops a track already playing from the other
/// list; it only changes the list subsequent operations resolve against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveList {
    /// The full "all tracks" list
    #[default]
    All,

    /// The favourites list
    Favourites,
}

/// Configuration for the transport controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Replay the current track on natural completion
    pub repeat_one: bool,

    /// Wrap to the first track when the last one completes
    pub repeat_all: bool,

    /// Audio-session routing applied at every load
    pub audio_session: AudioSessionConfig,
}
