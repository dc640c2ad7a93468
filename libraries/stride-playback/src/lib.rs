//! Stride Player - Transport Control
//!
//! Platform-agnostic transport control for Stride Player.
//!
//! This crate provides:
//! - A playback session owning at most one platform audio handle
//! - The idle/playing/paused transport state machine
//! - Repeat-one / repeat-all resolution on natural track completion
//! - Two track lists (all tracks + favourites) with an active-list selector
//! - Relative seeking clamped within the loaded track
//! - A derived now-playing view for the presentation surface
//!
//! # Architecture
//!
//! `stride-playback` is completely platform-agnostic:
//! - No dependency on a concrete audio stack
//! - No dependency on stride-storage (database)
//! - No async runtime
//!
//! Platform-specific code (audio loading/output, media scanning) is provided
//! via the `stride-core` traits. The embedder forwards user intents to the
//! controller, feeds it platform status reports, and drains its event queue
//! to render the UI and persist favourites.
//!
//! # Example
//!
//! ```rust
//! use stride_core::{AudioBackend, AudioHandle, AudioSessionConfig, StatusSnapshot, Track};
//! use stride_playback::{PlayerConfig, TrackLists, TransportController};
//!
//! // Implement the platform seam for your audio stack
//! struct MyHandle {
//!     status: StatusSnapshot,
//! }
//!
//! impl AudioHandle for MyHandle {
//!     fn play(&mut self) -> stride_core::Result<()> {
//!         self.status.is_playing = true;
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) -> stride_core::Result<()> {
//!         self.status.is_playing = false;
//!         Ok(())
//!     }
//!
//!     fn seek_to(&mut self, position_ms: u64) -> stride_core::Result<()> {
//!         self.status.position_ms = position_ms;
//!         Ok(())
//!     }
//!
//!     fn status(&mut self) -> StatusSnapshot {
//!         self.status
//!     }
//! }
//!
//! struct MyBackend;
//!
//! impl AudioBackend for MyBackend {
//!     fn load(
//!         &mut self,
//!         _track: &Track,
//!         _config: &AudioSessionConfig,
//!     ) -> stride_core::Result<Box<dyn AudioHandle>> {
//!         Ok(Box::new(MyHandle {
//!             status: StatusSnapshot {
//!                 is_loaded: true,
//!                 duration_ms: Some(180_000),
//!                 ..StatusSnapshot::unloaded()
//!             },
//!         }))
//!     }
//! }
//!
//! // Drive the transport
//! let lists = TrackLists::new(
//!     vec![Track::new("file:///music/song.mp3", "song.mp3")],
//!     Vec::new(),
//! );
//! let mut controller =
//!     TransportController::new(Box::new(MyBackend), lists, PlayerConfig::default());
//!
//! controller.play_track(0).unwrap();
//! assert!(controller.now_playing().is_playing);
//!
//! controller.toggle_pause().unwrap();
//! assert!(!controller.now_playing().is_playing);
//! ```

mod controller;
mod display;
mod error;
mod events;
mod library;
mod session;
pub mod types;

// Public exports
pub use controller::{TransportController, SEEK_STEP_MS};
pub use display::{format_time, NowPlaying};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use library::TrackLists;
pub use session::PlaybackSession;
pub use types::{ActiveList, PlayerConfig, TransportState};
