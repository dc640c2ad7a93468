//! Playback session
//!
//! Wraps at most one platform audio handle. The "at most one loaded handle"
//! invariant lives here: a new load always releases the previous handle
//! before asking the backend for the next one, and callers cannot observe a
//! session with two live handles.

use crate::error::{PlaybackError, Result};
use stride_core::{AudioBackend, AudioHandle, AudioSessionConfig, StatusSnapshot, Track};

/// Owner of the single active platform audio handle
#[derive(Default)]
pub struct PlaybackSession {
    handle: Option<Box<dyn AudioHandle>>,
}

impl PlaybackSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a track is currently loaded
    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }

    /// Load a track, replacing whatever was loaded before.
    ///
    /// The previous handle is released before the backend is asked for a new
    /// one, so a failed load leaves the session empty rather than holding a
    /// stale handle.
    pub fn load(
        &mut self,
        backend: &mut dyn AudioBackend,
        track: &Track,
        config: &AudioSessionConfig,
    ) -> Result<()> {
        self.unload();
        self.handle = Some(backend.load(track, config)?);
        Ok(())
    }

    /// Release the current handle, if any. Idempotent.
    pub fn unload(&mut self) {
        // Dropping the box releases the platform resource
        self.handle = None;
    }

    /// Start or resume playback; no-op when nothing is loaded
    pub fn play(&mut self) -> Result<()> {
        match self.handle.as_mut() {
            Some(handle) => handle.play().map_err(PlaybackError::from),
            None => Ok(()),
        }
    }

    /// Pause playback; no-op when nothing is loaded
    pub fn pause(&mut self) -> Result<()> {
        match self.handle.as_mut() {
            Some(handle) => handle.pause().map_err(PlaybackError::from),
            None => Ok(()),
        }
    }

    /// Seek to an absolute position, clamped to `[0, duration_ms]`
    pub fn seek_to(&mut self, position_ms: u64) -> Result<()> {
        let handle = self.handle.as_mut().ok_or(PlaybackError::NoTrackLoaded)?;
        let duration_ms = handle.status().duration_ms.unwrap_or(0);
        handle.seek_to(position_ms.min(duration_ms))?;
        Ok(())
    }

    /// Most recent platform status, `None` when unloaded
    pub fn status(&mut self) -> Option<StatusSnapshot> {
        self.handle.as_mut().map(|handle| handle.status())
    }
}
