//! Playback events
//!
//! Event-based communication for UI and persistence synchronization. Events
//! accumulate on the controller and are drained by the embedder, which
//! renders the now-playing surface and writes favourites changes through to
//! the store.

use crate::types::{ActiveList, TransportState};
use serde::{Deserialize, Serialize};

/// Events emitted by the transport controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Transport state changed (idle, playing, paused)
    StateChanged {
        /// The new transport state
        state: TransportState,
    },

    /// A different track was loaded
    TrackChanged {
        /// URI of the newly loaded track
        uri: String,
        /// URI of the previously loaded track (if any)
        previous_uri: Option<String>,
    },

    /// A track reached its natural end
    TrackFinished {
        /// URI of the finished track
        uri: String,
    },

    /// Periodic position report for display
    PositionUpdate {
        /// Current playback position
        position_ms: u64,
        /// Total track duration
        duration_ms: u64,
    },

    /// Favourites membership of a track changed
    FavouritesChanged {
        /// URI whose membership toggled
        uri: String,
        /// Whether the track is now a favourite
        is_favourite: bool,
    },

    /// Repeat flags changed
    RepeatChanged {
        /// Replay-current-track flag
        repeat_one: bool,
        /// Wrap-at-end-of-list flag
        repeat_all: bool,
    },

    /// Navigation switched between the all-tracks and favourites lists
    ActiveListChanged {
        /// The newly active list
        list: ActiveList,
    },

    /// A playback operation failed and was abandoned
    Error {
        /// Error message
        message: String,
    },
}
