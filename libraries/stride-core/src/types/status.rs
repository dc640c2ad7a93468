/// Platform playback status
use serde::{Deserialize, Serialize};

/// Last reported status of the platform audio primitive.
///
/// Used to derive display time and to detect end-of-track. The platform
/// reports `did_just_finish = true` exactly once when a track completes
/// naturally; it is never set on manual stop or seek.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Whether a track is loaded
    pub is_loaded: bool,

    /// Whether playback is advancing
    pub is_playing: bool,

    /// Playback position from start of track, in milliseconds
    pub position_ms: u64,

    /// Total track duration in milliseconds, if known
    pub duration_ms: Option<u64>,

    /// Set once when the track reaches its natural end
    pub did_just_finish: bool,
}

impl StatusSnapshot {
    /// Snapshot representing "nothing loaded"
    pub fn unloaded() -> Self {
        Self::default()
    }
}
