/// Audio session routing policy
use serde::{Deserialize, Serialize};

/// Audio-routing policy applied when a track is loaded.
///
/// The defaults describe background-capable, non-mixing playback: keep
/// playing when the app is backgrounded, claim the audio session exclusively,
/// ignore the iOS silent switch, and duck other apps on Android.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSessionConfig {
    /// Keep the session alive while the app is in the background
    pub stays_active_in_background: bool,

    /// Mix with audio from other apps instead of interrupting it
    pub mix_with_others: bool,

    /// Play even when the iOS silent switch is on
    pub play_in_silent_mode: bool,

    /// Duck other apps' audio on Android
    pub duck_others: bool,

    /// Allow simultaneous recording
    pub allows_recording: bool,
}

impl Default for AudioSessionConfig {
    fn default() -> Self {
        Self {
            stays_active_in_background: true,
            mix_with_others: false,
            play_in_silent_mode: true,
            duck_others: true,
            allows_recording: false,
        }
    }
}
