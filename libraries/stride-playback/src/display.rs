//! Now-playing presentation
//!
//! Stateless view of the transport state. Nothing here feeds back into the
//! state machine; the embedder renders this snapshot and maps its controls
//! onto the controller's operations.

use serde::{Deserialize, Serialize};

/// Derived now-playing view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    /// Display name of the loaded track, empty when idle
    pub song_title: String,

    /// Elapsed time as `MM:SS`
    pub current_time_text: String,

    /// Total duration as `MM:SS`
    pub duration_text: String,

    /// Whether playback is advancing
    pub is_playing: bool,

    /// Favourites membership of the loaded track
    pub is_favourite: bool,

    /// Replay-current-track flag
    pub repeat_one: bool,

    /// Wrap-at-end-of-list flag
    pub repeat_all: bool,
}

/// Format milliseconds as zero-padded `MM:SS`; unknown time renders `00:00`.
///
/// Minutes are not capped at an hour, matching the display of long tracks as
/// e.g. `75:30`.
pub fn format_time(millis: Option<u64>) -> String {
    let Some(millis) = millis else {
        return "00:00".to_string();
    };
    let minutes = millis / 60_000;
    let seconds = (millis % 60_000) / 1_000;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_and_unknown_identically() {
        assert_eq!(format_time(None), "00:00");
        assert_eq!(format_time(Some(0)), "00:00");
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(Some(1_000)), "00:01");
        assert_eq!(format_time(Some(61_000)), "01:01");
        assert_eq!(format_time(Some(3_599_999)), "59:59");
    }

    #[test]
    fn minutes_run_past_the_hour() {
        assert_eq!(format_time(Some(4_530_000)), "75:30");
    }
}
