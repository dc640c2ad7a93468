//! Stride Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Stride Player.
//!
//! This crate provides the foundational building blocks shared by the playback,
//! storage, and discovery layers.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `StatusSnapshot`, `AudioSessionConfig`
//! - **Platform Traits**: `AudioBackend`, `AudioHandle`, `TrackProvider`
//! - **Error Handling**: Unified `StrideError` and `Result` types
//!
//! Platform-specific code (audio decoding/output, media scanning, the file
//! picker) lives behind the traits; the playback core never links against a
//! concrete platform.
//!
//! # Example
//!
//! ```rust
//! use stride_core::Track;
//!
//! let track = Track::new("file:///music/song.mp3", "song.mp3");
//! assert_eq!(track.name, "song.mp3");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StrideError};
pub use traits::{AudioBackend, AudioHandle, TrackProvider};
pub use types::{AudioSessionConfig, StatusSnapshot, Track};
