//! Integration tests for the transport controller
//!
//! Drives the state machine through a fake platform backend and verifies the
//! transport invariants: single-handle ownership, favourites membership,
//! navigation bounds, repeat resolution, and clamped seeking.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use stride_core::{
    AudioBackend, AudioHandle, AudioSessionConfig, StatusSnapshot, StrideError, Track,
};
use stride_playback::{
    ActiveList, PlayerConfig, PlayerEvent, TrackLists, TransportController, TransportState,
};

// ===== Test Helpers =====

/// Shared observation point for everything the backend is asked to do
#[derive(Default)]
struct Probe {
    live_handles: usize,
    max_live_handles: usize,
    loads: Vec<String>,
    seeks: Vec<u64>,
}

struct FakeHandle {
    probe: Arc<Mutex<Probe>>,
    status: StatusSnapshot,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.probe.lock().unwrap().live_handles -= 1;
    }
}

impl AudioHandle for FakeHandle {
    fn play(&mut self) -> stride_core::Result<()> {
        self.status.is_playing = true;
        Ok(())
    }

    fn pause(&mut self) -> stride_core::Result<()> {
        self.status.is_playing = false;
        Ok(())
    }

    fn seek_to(&mut self, position_ms: u64) -> stride_core::Result<()> {
        self.probe.lock().unwrap().seeks.push(position_ms);
        self.status.position_ms = position_ms;
        Ok(())
    }

    fn status(&mut self) -> StatusSnapshot {
        self.status
    }
}

struct FakeBackend {
    probe: Arc<Mutex<Probe>>,
    duration_ms: u64,
    failing: HashSet<String>,
}

impl AudioBackend for FakeBackend {
    fn load(
        &mut self,
        track: &Track,
        _config: &AudioSessionConfig,
    ) -> stride_core::Result<Box<dyn AudioHandle>> {
        if self.failing.contains(&track.uri) {
            return Err(StrideError::audio(format!("cannot open {}", track.uri)));
        }

        let mut probe = self.probe.lock().unwrap();
        probe.live_handles += 1;
        probe.max_live_handles = probe.max_live_handles.max(probe.live_handles);
        probe.loads.push(track.uri.clone());

        Ok(Box::new(FakeHandle {
            probe: Arc::clone(&self.probe),
            status: StatusSnapshot {
                is_loaded: true,
                duration_ms: Some(self.duration_ms),
                ..StatusSnapshot::unloaded()
            },
        }))
    }
}

fn tracks(uris: &[&str]) -> Vec<Track> {
    uris.iter().map(|uri| Track::new(*uri, *uri)).collect()
}

fn player(all: &[&str], favourites: &[&str]) -> (TransportController, Arc<Mutex<Probe>>) {
    player_with_failing(all, favourites, &[])
}

fn player_with_failing(
    all: &[&str],
    favourites: &[&str],
    failing: &[&str],
) -> (TransportController, Arc<Mutex<Probe>>) {
    let probe = Arc::new(Mutex::new(Probe::default()));
    let backend = FakeBackend {
        probe: Arc::clone(&probe),
        duration_ms: 60_000,
        failing: failing.iter().map(|uri| (*uri).to_string()).collect(),
    };
    let controller = TransportController::new(
        Box::new(backend),
        TrackLists::new(tracks(all), tracks(favourites)),
        PlayerConfig::default(),
    );
    (controller, probe)
}

/// Status report for a track that just reached its natural end
fn finished(duration_ms: u64) -> StatusSnapshot {
    StatusSnapshot {
        is_loaded: true,
        is_playing: false,
        position_ms: duration_ms,
        duration_ms: Some(duration_ms),
        did_just_finish: true,
    }
}

/// Ordinary mid-track status report
fn playing_at(position_ms: u64, duration_ms: u64) -> StatusSnapshot {
    StatusSnapshot {
        is_loaded: true,
        is_playing: true,
        position_ms,
        duration_ms: Some(duration_ms),
        did_just_finish: false,
    }
}

// ===== Single-Handle Ownership =====

#[test]
fn at_most_one_handle_is_ever_loaded() {
    let (mut c, probe) = player(&["a", "b", "c"], &[]);

    c.play_track(0).unwrap();
    c.play_track(2).unwrap();
    c.previous().unwrap();
    c.next().unwrap();

    {
        let probe = probe.lock().unwrap();
        assert_eq!(probe.max_live_handles, 1);
        assert_eq!(probe.live_handles, 1);
    }

    c.close();
    assert_eq!(probe.lock().unwrap().live_handles, 0);
}

#[test]
fn close_twice_produces_identical_idle_state() {
    let (mut c, probe) = player(&["a"], &[]);
    c.play_track(0).unwrap();

    c.close();
    c.drain_events();

    c.close();
    assert_eq!(c.state(), TransportState::Idle);
    assert!(c.current_track().is_none());
    assert_eq!(probe.lock().unwrap().live_handles, 0);
    // Second close is a true no-op: no duplicate events
    assert!(c.drain_events().is_empty());
}

#[test]
fn failed_load_leaves_idle_without_a_dangling_handle() {
    let (mut c, probe) = player_with_failing(&["a", "b"], &[], &["b"]);

    c.play_track(0).unwrap();
    assert!(c.play_track(1).is_err());

    assert_eq!(c.state(), TransportState::Idle);
    assert!(c.current_track().is_none());
    assert_eq!(probe.lock().unwrap().live_handles, 0);

    let events = c.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PlayerEvent::Error { .. })));
}

// ===== Favourites =====

#[test]
fn load_recomputes_favourite_membership() {
    let (mut c, _) = player(&["a", "b"], &["b"]);

    c.play_track(1).unwrap();
    assert!(c.is_favourite());

    c.play_track(0).unwrap();
    assert!(!c.is_favourite());
}

#[test]
fn toggle_favourite_applies_to_the_loaded_track() {
    let (mut c, _) = player(&["a", "b"], &[]);
    c.play_track(0).unwrap();

    c.toggle_favourite();
    assert!(c.is_favourite());
    assert!(c.lists().is_favourite("a"));

    c.toggle_favourite();
    assert!(!c.is_favourite());
    assert!(c.lists().favourites().is_empty());
}

#[test]
fn toggle_favourite_when_idle_changes_nothing() {
    let (mut c, _) = player(&["a"], &["b"]);

    c.toggle_favourite();

    assert_eq!(c.state(), TransportState::Idle);
    assert_eq!(c.lists().favourites().len(), 1);
    assert!(c.drain_events().is_empty());
}

// ===== Navigation =====

#[test]
fn previous_steps_back_one_index() {
    let (mut c, _) = player(&["a", "b", "c"], &[]);
    c.play_track(2).unwrap();

    c.previous().unwrap();
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn previous_at_list_start_is_a_noop() {
    let (mut c, probe) = player(&["a", "b"], &[]);
    c.play_track(0).unwrap();

    c.previous().unwrap();

    assert_eq!(c.current_index(), Some(0));
    assert_eq!(probe.lock().unwrap().loads, vec!["a"]);
}

#[test]
fn next_at_end_without_repeat_all_goes_idle() {
    let (mut c, probe) = player(&["a", "b"], &[]);
    c.play_track(1).unwrap();

    c.next().unwrap();

    assert_eq!(c.state(), TransportState::Idle);
    assert!(c.current_index().is_none());
    assert_eq!(probe.lock().unwrap().live_handles, 0);
}

#[test]
fn next_at_end_with_repeat_all_wraps_to_first() {
    let (mut c, _) = player(&["a", "b"], &[]);
    c.toggle_repeat_all();
    c.play_track(1).unwrap();

    c.next().unwrap();

    assert_eq!(c.current_index(), Some(0));
    assert_eq!(c.state(), TransportState::Playing);
}

// ===== Track-Finished Resolution =====

#[test]
fn finish_advances_through_the_list_then_stops() {
    let (mut c, probe) = player(&["a", "b", "c"], &[]);
    c.play_track(0).unwrap();

    c.handle_status(finished(60_000)).unwrap();
    assert_eq!(c.current_index(), Some(1));

    c.handle_status(finished(60_000)).unwrap();
    assert_eq!(c.current_index(), Some(2));

    c.handle_status(finished(60_000)).unwrap();
    assert_eq!(c.state(), TransportState::Idle);
    assert!(c.current_index().is_none());
    assert_eq!(probe.lock().unwrap().live_handles, 0);
}

#[test]
fn finish_with_repeat_one_replays_the_same_index() {
    let (mut c, probe) = player(&["a", "b"], &[]);
    c.toggle_repeat_one();
    // repeat-one wins regardless of repeat-all
    c.toggle_repeat_all();
    c.play_track(0).unwrap();

    c.handle_status(finished(60_000)).unwrap();
    c.handle_status(finished(60_000)).unwrap();

    assert_eq!(c.current_index(), Some(0));
    assert_eq!(probe.lock().unwrap().loads, vec!["a", "a", "a"]);
}

#[test]
fn finish_with_repeat_all_wraps_at_list_end_only() {
    let (mut c, probe) = player(&["a", "b"], &[]);
    c.toggle_repeat_all();
    c.play_track(0).unwrap();

    // Mid-list: advances normally, no wraparound
    c.handle_status(finished(60_000)).unwrap();
    assert_eq!(c.current_index(), Some(1));

    // End of list: wraps to the first track
    c.handle_status(finished(60_000)).unwrap();
    assert_eq!(c.current_index(), Some(0));
    assert_eq!(probe.lock().unwrap().loads, vec!["a", "b", "a"]);
}

#[test]
fn finish_emits_track_finished_before_the_next_load() {
    let (mut c, _) = player(&["a", "b"], &[]);
    c.play_track(0).unwrap();
    c.drain_events();

    c.handle_status(finished(60_000)).unwrap();

    let events = c.drain_events();
    let finished_pos = events
        .iter()
        .position(|e| matches!(e, PlayerEvent::TrackFinished { uri } if uri == "a"));
    let changed_pos = events
        .iter()
        .position(|e| matches!(e, PlayerEvent::TrackChanged { uri, .. } if uri == "b"));
    assert!(finished_pos.unwrap() < changed_pos.unwrap());
}

// ===== Seeking =====

#[test]
fn seek_backward_clamps_to_zero() {
    let (mut c, probe) = player(&["a"], &[]);
    c.play_track(0).unwrap();
    c.handle_status(playing_at(3_000, 60_000)).unwrap();

    c.seek_by(-5_000).unwrap();

    assert_eq!(probe.lock().unwrap().seeks, vec![0]);
}

#[test]
fn seek_forward_clamps_to_duration() {
    let (mut c, probe) = player(&["a"], &[]);
    c.play_track(0).unwrap();
    c.handle_status(playing_at(58_000, 60_000)).unwrap();

    c.seek_by(5_000).unwrap();

    assert_eq!(probe.lock().unwrap().seeks, vec![60_000]);
}

#[test]
fn seek_when_idle_is_a_noop() {
    let (mut c, probe) = player(&["a"], &[]);

    c.seek_by(-5_000).unwrap();
    c.seek_by(5_000).unwrap();

    assert!(probe.lock().unwrap().seeks.is_empty());
}

// ===== Active-List Switching =====

#[test]
fn switching_lists_keeps_the_loaded_track_playing() {
    let (mut c, _) = player(&["a", "b"], &["c"]);
    c.play_track(1).unwrap();

    c.set_active_list(ActiveList::Favourites);

    assert_eq!(c.state(), TransportState::Playing);
    assert_eq!(c.current_track().map(|t| t.uri.as_str()), Some("b"));
}

#[test]
fn navigation_reresolves_the_index_by_identity_after_a_switch() {
    // "a" sits at index 0 of all-tracks but index 1 of favourites
    let (mut c, _) = player(&["a", "b"], &["c", "a"]);
    c.play_track(0).unwrap();

    c.set_active_list(ActiveList::Favourites);
    assert_eq!(c.current_index(), Some(1));

    // previous() now navigates within favourites
    c.previous().unwrap();
    assert_eq!(c.current_track().map(|t| t.uri.as_str()), Some("c"));
}

#[test]
fn navigation_noops_when_the_loaded_track_left_the_active_list() {
    let (mut c, _) = player(&["a", "b"], &["c"]);
    c.play_track(1).unwrap();

    c.set_active_list(ActiveList::Favourites);
    assert!(c.current_index().is_none());

    c.next().unwrap();
    c.previous().unwrap();

    // Still playing the track loaded from the other list
    assert_eq!(c.state(), TransportState::Playing);
    assert_eq!(c.current_track().map(|t| t.uri.as_str()), Some("b"));
}

#[test]
fn repeat_one_replays_even_after_leaving_the_active_list() {
    let (mut c, probe) = player(&["a", "b"], &["c"]);
    c.toggle_repeat_one();
    c.play_track(0).unwrap();

    c.set_active_list(ActiveList::Favourites);
    c.handle_status(finished(60_000)).unwrap();

    assert_eq!(c.current_track().map(|t| t.uri.as_str()), Some("a"));
    assert_eq!(probe.lock().unwrap().loads, vec!["a", "a"]);
}

#[test]
fn finish_after_switch_falls_through_to_stop() {
    let (mut c, _) = player(&["a", "b"], &["c"]);
    c.play_track(1).unwrap();

    c.set_active_list(ActiveList::Favourites);
    c.handle_status(finished(60_000)).unwrap();

    assert_eq!(c.state(), TransportState::Idle);
}

// ===== List Updates =====

#[test]
fn rescan_result_replaces_all_tracks_but_not_favourites() {
    let (mut c, _) = player(&["a"], &["a"]);

    c.replace_all_tracks(tracks(&["x", "y"]));

    assert_eq!(c.lists().all().len(), 2);
    assert!(c.lists().is_favourite("a"));
}

#[test]
fn picked_files_append_to_favourites_and_refresh_the_flag() {
    let (mut c, _) = player(&["a"], &[]);
    c.play_track(0).unwrap();
    assert!(!c.is_favourite());

    c.add_favourites(tracks(&["a"]));

    assert!(c.is_favourite());
}
