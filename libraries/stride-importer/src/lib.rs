//! Stride Player Importer
//!
//! Local audio discovery for Stride Player: a filesystem scanner with an
//! audio-extension allow-list, and a [`stride_core::TrackProvider`]
//! implementation feeding the playback core.
//!
//! "Load all audio files" maps to [`LocalTrackProvider::all_tracks`];
//! user file picks go through [`LocalTrackProvider::pick_tracks`], which
//! validates the picks and silently drops anything unplayable.

mod error;
mod provider;
mod scanner;

pub use error::ImportError;
pub use provider::{track_from_path, LocalTrackProvider};
pub use scanner::{is_audio_file, FileScanner};
