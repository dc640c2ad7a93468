//! Local track provider
//!
//! Bridges the filesystem scanner to the playback core: scan roots become
//! the "all tracks" list, picked files become favourites appends.

use crate::error::ImportError;
use crate::scanner::FileScanner;
use std::path::{Path, PathBuf};
use stride_core::{Result, Track, TrackProvider};

/// Tracks discovered on the local filesystem
pub struct LocalTrackProvider {
    roots: Vec<PathBuf>,
    scanner: FileScanner,
}

impl LocalTrackProvider {
    /// Create a provider scanning the given roots
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            scanner: FileScanner::new(),
        }
    }

    /// Use a custom-configured scanner
    pub fn with_scanner(mut self, scanner: FileScanner) -> Self {
        self.scanner = scanner;
        self
    }
}

/// Build a track from a local file path.
///
/// The URI is the path itself; the display name is the file name.
pub fn track_from_path(path: &Path) -> Track {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Track::new(path.to_string_lossy().into_owned(), name)
}

impl TrackProvider for LocalTrackProvider {
    fn all_tracks(&self) -> Result<Vec<Track>> {
        let mut tracks = Vec::new();

        for root in &self.roots {
            match self.scanner.scan_directory(root) {
                Ok(paths) => tracks.extend(paths.iter().map(|p| track_from_path(p))),
                // A refused root aborts the whole scan so the caller keeps
                // its previous list; a missing root is just skipped
                Err(e @ ImportError::PermissionDenied(_)) => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(root = %root.display(), error = %e, "failed to scan root");
                }
            }
        }

        Ok(tracks)
    }

    fn pick_tracks(&self, paths: &[PathBuf]) -> Result<Vec<Track>> {
        Ok(self
            .scanner
            .validate_paths(paths)
            .iter()
            .map(|p| track_from_path(p))
            .collect())
    }
}
