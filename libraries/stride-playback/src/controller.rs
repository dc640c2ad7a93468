//! Transport controller - core orchestration
//!
//! Decides, for each user intent and each platform status report, what the
//! playback session does next, and keeps the track position pointer
//! consistent with the active list.
//!
//! All state mutates through `&mut self`, so user-driven and status-driven
//! transitions are serialized by construction; embedders that receive
//! platform callbacks on another thread wrap the controller in a mutex and
//! feed snapshots through [`TransportController::handle_status`].

use crate::{
    display::{format_time, NowPlaying},
    error::{PlaybackError, Result},
    events::PlayerEvent,
    library::TrackLists,
    session::PlaybackSession,
    types::{ActiveList, PlayerConfig, TransportState},
};
use stride_core::{AudioBackend, AudioSessionConfig, StatusSnapshot, Track};

/// Seek step used by the forward/backward transport buttons
pub const SEEK_STEP_MS: i64 = 5_000;

/// The loaded track plus the index it was loaded at.
///
/// The index is pinned at load time and may go stale when lists are resized
/// or switched; reads go through [`TransportController::resolved_index`].
#[derive(Debug, Clone)]
struct LoadedTrack {
    track: Track,
    index: usize,
}

/// Central transport control
///
/// Owns the playback session and the track lists, and runs the
/// idle/playing/paused state machine:
/// - play/pause/next/previous/seek/close intents
/// - repeat-one and repeat-all resolution on natural track completion
/// - favourites membership of the loaded track
/// - pending-event queue drained by the embedder
pub struct TransportController {
    backend: Box<dyn AudioBackend>,
    session: PlaybackSession,
    lists: TrackLists,

    state: TransportState,
    current: Option<LoadedTrack>,
    is_favourite: bool,
    repeat_one: bool,
    repeat_all: bool,

    audio_session: AudioSessionConfig,
    status: StatusSnapshot,
    pending_events: Vec<PlayerEvent>,
}

impl TransportController {
    /// Create a controller over the given platform backend and lists
    pub fn new(backend: Box<dyn AudioBackend>, lists: TrackLists, config: PlayerConfig) -> Self {
        Self {
            backend,
            session: PlaybackSession::new(),
            lists,
            state: TransportState::Idle,
            current: None,
            is_favourite: false,
            repeat_one: config.repeat_one,
            repeat_all: config.repeat_all,
            audio_session: config.audio_session,
            status: StatusSnapshot::unloaded(),
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Load and play the track at `index` in the active list.
    ///
    /// Whatever was loaded before is released first. A failed load logs,
    /// emits an error event, and leaves the controller idle with no handle.
    pub fn play_track(&mut self, index: usize) -> Result<()> {
        let track = self
            .lists
            .active_tracks()
            .get(index)
            .cloned()
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;
        self.load_and_play(track, index)
    }

    fn load_and_play(&mut self, track: Track, index: usize) -> Result<()> {
        let previous_uri = self.current.as_ref().map(|c| c.track.uri.clone());

        if let Err(e) = self.try_load_and_play(&track) {
            tracing::warn!(uri = %track.uri, error = %e, "failed to load track");
            let was_idle = self.state == TransportState::Idle;
            self.reset_to_idle();
            self.emit(PlayerEvent::Error {
                message: e.to_string(),
            });
            if !was_idle {
                self.emit(PlayerEvent::StateChanged {
                    state: TransportState::Idle,
                });
            }
            return Err(e);
        }

        self.current = Some(LoadedTrack {
            track: track.clone(),
            index,
        });
        // Membership is recomputed on every load, never carried across loads
        self.is_favourite = self.lists.is_favourite(&track.uri);
        self.status = self.session.status().unwrap_or_default();
        self.state = TransportState::Playing;

        self.emit(PlayerEvent::TrackChanged {
            uri: track.uri,
            previous_uri,
        });
        self.emit(PlayerEvent::StateChanged {
            state: TransportState::Playing,
        });
        Ok(())
    }

    fn try_load_and_play(&mut self, track: &Track) -> Result<()> {
        let backend = self.backend.as_mut();
        self.session.load(backend, track, &self.audio_session)?;
        self.session.play()
    }

    /// Toggle between playing and paused; no-op when idle
    pub fn toggle_pause(&mut self) -> Result<()> {
        match self.state {
            TransportState::Idle => Ok(()),
            TransportState::Playing => {
                self.session.pause()?;
                self.state = TransportState::Paused;
                self.status.is_playing = false;
                self.emit(PlayerEvent::StateChanged {
                    state: TransportState::Paused,
                });
                Ok(())
            }
            TransportState::Paused => {
                self.session.play()?;
                self.state = TransportState::Playing;
                self.status.is_playing = true;
                self.emit(PlayerEvent::StateChanged {
                    state: TransportState::Playing,
                });
                Ok(())
            }
        }
    }

    /// Advance to the next track in the active list.
    ///
    /// Past the end, repeat-all wraps to the first track; otherwise playback
    /// stops and the controller goes idle. From idle with a non-empty list
    /// this starts the first track.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        let len = self.lists.active_tracks().len();
        if len == 0 {
            return Ok(());
        }

        match self.resolved_index() {
            Some(i) if i + 1 < len => self.play_track(i + 1),
            Some(_) if self.repeat_all => self.play_track(0),
            Some(_) => {
                self.stop();
                Ok(())
            }
            None if self.current.is_none() => self.play_track(0),
            // Loaded track is absent from the active list: nothing to advance from
            None => Ok(()),
        }
    }

    /// Go back one track; no-op at the start of the list or when idle
    pub fn previous(&mut self) -> Result<()> {
        match self.resolved_index() {
            Some(i) if i > 0 => self.play_track(i - 1),
            _ => Ok(()),
        }
    }

    /// Seek relative to the last reported position, clamped within the track.
    ///
    /// No-op when nothing is loaded or no status has been reported yet.
    pub fn seek_by(&mut self, delta_ms: i64) -> Result<()> {
        if !self.session.is_loaded() || !self.status.is_loaded {
            return Ok(());
        }
        let target = self.status.position_ms.saturating_add_signed(delta_ms);
        let target = match self.status.duration_ms {
            Some(duration_ms) => target.min(duration_ms),
            None => target,
        };
        self.session.seek_to(target)?;
        self.status.position_ms = target;
        Ok(())
    }

    /// Seek forward by the transport step
    pub fn seek_forward(&mut self) -> Result<()> {
        self.seek_by(SEEK_STEP_MS)
    }

    /// Seek backward by the transport step
    pub fn seek_backward(&mut self) -> Result<()> {
        self.seek_by(-SEEK_STEP_MS)
    }

    /// Release the session and go idle. Idempotent; safe on every exit path.
    pub fn close(&mut self) {
        if self.state == TransportState::Idle && self.current.is_none() && !self.session.is_loaded()
        {
            return;
        }
        self.stop();
    }

    fn stop(&mut self) {
        self.reset_to_idle();
        self.emit(PlayerEvent::StateChanged {
            state: TransportState::Idle,
        });
    }

    fn reset_to_idle(&mut self) {
        self.session.unload();
        self.current = None;
        self.is_favourite = false;
        self.status = StatusSnapshot::unloaded();
        self.state = TransportState::Idle;
    }

    // ===== Repeat & Favourites =====

    /// Toggle replay-current-track
    pub fn toggle_repeat_one(&mut self) {
        self.repeat_one = !self.repeat_one;
        self.emit_repeat_changed();
    }

    /// Toggle wrap-at-end-of-list
    pub fn toggle_repeat_all(&mut self) {
        self.repeat_all = !self.repeat_all;
        self.emit_repeat_changed();
    }

    /// Toggle favourites membership of the currently loaded track.
    ///
    /// Silent no-op when nothing is loaded. Resolves against the loaded
    /// track itself, never against a list position, so a stale index can't
    /// toggle the wrong entry.
    pub fn toggle_favourite(&mut self) {
        let Some(current) = self.current.as_ref() else {
            return;
        };
        let track = current.track.clone();
        self.is_favourite = self.lists.toggle_favourite(&track);
        self.emit(PlayerEvent::FavouritesChanged {
            uri: track.uri,
            is_favourite: self.is_favourite,
        });
    }

    // ===== List Management =====

    /// Switch which list navigation operates over.
    ///
    /// Playback of a track loaded from the other list continues; the loaded
    /// track's index is re-resolved by identity in the newly active list.
    pub fn set_active_list(&mut self, list: ActiveList) {
        if self.lists.active() == list {
            return;
        }
        self.lists.set_active(list);
        if let Some(index) = self
            .current
            .as_ref()
            .and_then(|c| self.lists.position_in_active(&c.track.uri))
        {
            if let Some(current) = self.current.as_mut() {
                current.index = index;
            }
        }
        self.emit(PlayerEvent::ActiveListChanged { list });
    }

    /// Replace the "all tracks" list with a fresh scan result
    pub fn replace_all_tracks(&mut self, tracks: Vec<Track>) {
        self.lists.replace_all(tracks);
    }

    /// Append user-picked tracks to the favourites list
    pub fn add_favourites(&mut self, tracks: Vec<Track>) {
        self.lists.add_favourites(tracks);
        if let Some(current) = self.current.as_ref() {
            self.is_favourite = self.lists.is_favourite(&current.track.uri);
        }
    }

    // ===== Status Handling =====

    /// Poll the session for its latest status and process it
    pub fn tick(&mut self) -> Result<()> {
        match self.session.status() {
            Some(status) => self.handle_status(status),
            None => Ok(()),
        }
    }

    /// Process one platform status report.
    ///
    /// Stores the snapshot, reports position for display, and resolves a
    /// natural track completion through the repeat policy. The snapshot is
    /// read at invocation time against the *current* repeat flags and index,
    /// not values captured when the track was loaded.
    pub fn handle_status(&mut self, status: StatusSnapshot) -> Result<()> {
        self.status = status;
        if !status.is_loaded {
            return Ok(());
        }

        if let Some(duration_ms) = status.duration_ms {
            self.emit(PlayerEvent::PositionUpdate {
                position_ms: status.position_ms,
                duration_ms,
            });
        }

        if status.did_just_finish {
            self.handle_track_finished()?;
        }
        Ok(())
    }

    /// Resolve a natural track completion.
    ///
    /// First match wins: repeat-one replays the same track; a next track in
    /// range plays; repeat-all wraps to the start; otherwise unload and stop.
    fn handle_track_finished(&mut self) -> Result<()> {
        let Some(current) = self.current.as_ref() else {
            return Ok(());
        };
        let finished = current.track.clone();
        let pinned_index = current.index;
        self.emit(PlayerEvent::TrackFinished {
            uri: finished.uri.clone(),
        });

        if self.repeat_one {
            // Replays the loaded track even if it has left the active list
            return match self.resolved_index() {
                Some(i) => self.play_track(i),
                None => self.load_and_play(finished, pinned_index),
            };
        }

        let len = self.lists.active_tracks().len();
        match self.resolved_index() {
            Some(i) if i + 1 < len => self.play_track(i + 1),
            _ if self.repeat_all && len > 0 => self.play_track(0),
            _ => {
                self.stop();
                Ok(())
            }
        }
    }

    /// Index of the loaded track in the active list, if it is still there.
    ///
    /// The pinned index is trusted only while the list still carries the
    /// loaded URI at that position; otherwise membership is re-resolved by
    /// identity. Lists resized since load can therefore never cause an
    /// out-of-range read or navigation from the wrong position.
    fn resolved_index(&self) -> Option<usize> {
        let current = self.current.as_ref()?;
        let tracks = self.lists.active_tracks();
        match tracks.get(current.index) {
            Some(track) if track.uri == current.track.uri => Some(current.index),
            _ => self.lists.position_in_active(&current.track.uri),
        }
    }

    // ===== State Queries =====

    /// Current transport state
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref().map(|c| &c.track)
    }

    /// Index of the loaded track in the active list
    pub fn current_index(&self) -> Option<usize> {
        self.resolved_index()
    }

    /// Favourites membership of the loaded track
    pub fn is_favourite(&self) -> bool {
        self.is_favourite
    }

    /// Replay-current-track flag
    pub fn repeat_one(&self) -> bool {
        self.repeat_one
    }

    /// Wrap-at-end-of-list flag
    pub fn repeat_all(&self) -> bool {
        self.repeat_all
    }

    /// The track lists, for rendering and persistence
    pub fn lists(&self) -> &TrackLists {
        &self.lists
    }

    /// Last platform status processed by the controller
    pub fn status(&self) -> StatusSnapshot {
        self.status
    }

    /// Derived now-playing view for the presentation surface
    pub fn now_playing(&self) -> NowPlaying {
        let loaded = self.status.is_loaded;
        NowPlaying {
            song_title: self
                .current
                .as_ref()
                .map(|c| c.track.name.clone())
                .unwrap_or_default(),
            current_time_text: format_time(loaded.then_some(self.status.position_ms)),
            duration_text: format_time(if loaded { self.status.duration_ms } else { None }),
            is_playing: self.state == TransportState::Playing,
            is_favourite: self.is_favourite,
            repeat_one: self.repeat_one,
            repeat_all: self.repeat_all,
        }
    }

    // ===== Events =====

    /// Drain all pending events.
    ///
    /// Returns the events emitted since the last drain. The embedder calls
    /// this after each operation (or each status tick) to synchronize the
    /// UI and persist favourites changes.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether any events are waiting to be drained
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn emit_repeat_changed(&mut self) {
        self.emit(PlayerEvent::RepeatChanged {
            repeat_one: self.repeat_one,
            repeat_all: self.repeat_all,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::AudioHandle;

    struct SilentHandle {
        status: StatusSnapshot,
    }

    impl AudioHandle for SilentHandle {
        fn play(&mut self) -> stride_core::Result<()> {
            self.status.is_playing = true;
            Ok(())
        }

        fn pause(&mut self) -> stride_core::Result<()> {
            self.status.is_playing = false;
            Ok(())
        }

        fn seek_to(&mut self, position_ms: u64) -> stride_core::Result<()> {
            self.status.position_ms = position_ms;
            Ok(())
        }

        fn status(&mut self) -> StatusSnapshot {
            self.status
        }
    }

    struct SilentBackend;

    impl AudioBackend for SilentBackend {
        fn load(
            &mut self,
            _track: &Track,
            _config: &AudioSessionConfig,
        ) -> stride_core::Result<Box<dyn AudioHandle>> {
            Ok(Box::new(SilentHandle {
                status: StatusSnapshot {
                    is_loaded: true,
                    duration_ms: Some(60_000),
                    ..StatusSnapshot::unloaded()
                },
            }))
        }
    }

    fn controller(uris: &[&str]) -> TransportController {
        let all = uris.iter().map(|u| Track::new(*u, *u)).collect();
        TransportController::new(
            Box::new(SilentBackend),
            TrackLists::new(all, Vec::new()),
            PlayerConfig::default(),
        )
    }

    #[test]
    fn starts_idle() {
        let c = controller(&["a", "b"]);
        assert_eq!(c.state(), TransportState::Idle);
        assert!(c.current_track().is_none());
        assert!(c.current_index().is_none());
    }

    #[test]
    fn play_track_rejects_out_of_range_index() {
        let mut c = controller(&["a"]);
        assert!(matches!(
            c.play_track(5),
            Err(PlaybackError::IndexOutOfBounds(5))
        ));
        assert_eq!(c.state(), TransportState::Idle);
    }

    #[test]
    fn pause_toggles_between_playing_and_paused() {
        let mut c = controller(&["a"]);
        c.play_track(0).unwrap();
        assert_eq!(c.state(), TransportState::Playing);

        c.toggle_pause().unwrap();
        assert_eq!(c.state(), TransportState::Paused);

        c.toggle_pause().unwrap();
        assert_eq!(c.state(), TransportState::Playing);
    }

    #[test]
    fn pause_when_idle_is_a_noop() {
        let mut c = controller(&["a"]);
        c.toggle_pause().unwrap();
        assert_eq!(c.state(), TransportState::Idle);
    }

    #[test]
    fn next_from_idle_starts_the_first_track() {
        let mut c = controller(&["a", "b"]);
        c.next().unwrap();
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.state(), TransportState::Playing);
    }

    #[test]
    fn next_on_empty_list_is_a_noop() {
        let mut c = controller(&[]);
        c.next().unwrap();
        assert_eq!(c.state(), TransportState::Idle);
    }

    #[test]
    fn previous_from_idle_is_a_noop() {
        let mut c = controller(&["a", "b"]);
        c.previous().unwrap();
        assert_eq!(c.state(), TransportState::Idle);
        assert!(c.current_track().is_none());
    }

    #[test]
    fn repeat_toggles_are_independent() {
        let mut c = controller(&["a"]);
        c.toggle_repeat_one();
        c.toggle_repeat_all();
        assert!(c.repeat_one());
        assert!(c.repeat_all());

        c.toggle_repeat_one();
        assert!(!c.repeat_one());
        assert!(c.repeat_all());
    }

    #[test]
    fn now_playing_reflects_idle() {
        let c = controller(&["a"]);
        let view = c.now_playing();
        assert_eq!(view.song_title, "");
        assert_eq!(view.current_time_text, "00:00");
        assert_eq!(view.duration_text, "00:00");
        assert!(!view.is_playing);
    }

    #[test]
    fn now_playing_reflects_loaded_track() {
        let mut c = controller(&["a"]);
        c.play_track(0).unwrap();
        c.handle_status(StatusSnapshot {
            is_loaded: true,
            is_playing: true,
            position_ms: 61_000,
            duration_ms: Some(120_000),
            did_just_finish: false,
        })
        .unwrap();

        let view = c.now_playing();
        assert_eq!(view.song_title, "a");
        assert_eq!(view.current_time_text, "01:01");
        assert_eq!(view.duration_text, "02:00");
        assert!(view.is_playing);
    }
}
