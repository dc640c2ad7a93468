/// Platform trait seams for Stride Player
use crate::error::Result;
use crate::types::{AudioSessionConfig, StatusSnapshot, Track};
use std::path::PathBuf;

/// A loaded platform audio resource.
///
/// One handle corresponds to one loaded track. Dropping the handle releases
/// the underlying platform resource, so "unload" is simply letting go of the
/// box — there is no way to hold a released handle.
pub trait AudioHandle: Send {
    /// Start or resume playback
    ///
    /// # Errors
    /// Returns an error if the platform refuses to start playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the track loaded
    ///
    /// # Errors
    /// Returns an error if the platform refuses to pause
    fn pause(&mut self) -> Result<()>;

    /// Seek to an absolute position from the start of the track
    ///
    /// Callers pass positions already clamped to `[0, duration_ms]`.
    ///
    /// # Errors
    /// Returns an error if the underlying format cannot seek
    fn seek_to(&mut self, position_ms: u64) -> Result<()>;

    /// Most recent playback status.
    ///
    /// May be stale by at most one platform status interval. The snapshot
    /// reports `did_just_finish` exactly once per natural completion.
    fn status(&mut self) -> StatusSnapshot;
}

/// Platform audio loader.
///
/// Implementors open a track's resource and hand back a live handle
/// configured with the given audio-session routing policy.
pub trait AudioBackend: Send {
    /// Load a track, producing a playable handle.
    ///
    /// # Errors
    /// Returns an error if the resource cannot be opened: missing file,
    /// unsupported format, or permission denied.
    fn load(&mut self, track: &Track, config: &AudioSessionConfig) -> Result<Box<dyn AudioHandle>>;
}

/// Source of playable tracks.
///
/// Covers the two ways tracks enter the player: a full scan of available
/// audio ("load all audio files") and explicit user file picks.
pub trait TrackProvider: Send {
    /// Enumerate every available audio track.
    ///
    /// # Errors
    /// Returns `StrideError::PermissionDenied` when media access is refused;
    /// callers keep their previous list in that case.
    fn all_tracks(&self) -> Result<Vec<Track>>;

    /// Convert user-picked files into tracks.
    ///
    /// Unreadable or unsupported entries are dropped, not errors.
    ///
    /// # Errors
    /// Returns an error only when the pick operation itself fails.
    fn pick_tracks(&self, paths: &[PathBuf]) -> Result<Vec<Track>>;
}
