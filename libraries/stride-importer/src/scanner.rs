//! File scanning for audio files

use crate::error::{ImportError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported audio file extensions
const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "wav", "aac", "m4a", "opus"];

/// Scanner for audio files in directories
#[derive(Default)]
pub struct FileScanner {
    /// Whether to follow symbolic links
    follow_links: bool,

    /// Maximum depth to traverse (unlimited when unset)
    max_depth: Option<usize>,
}

impl FileScanner {
    /// Create a new file scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Scan a directory for audio files.
    ///
    /// An unreadable root is an error (a refused root distinguishes
    /// `PermissionDenied` so callers can keep their previous list);
    /// unreadable entries below the root are logged and skipped. Results are
    /// sorted for a stable list order across scans.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = std::fs::metadata(root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ImportError::RootNotFound(root.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                ImportError::PermissionDenied(root.display().to_string())
            }
            _ => ImportError::Io(e),
        })?;

        if !metadata.is_dir() {
            return Err(ImportError::NotADirectory(root.display().to_string()));
        }

        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut audio_files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && is_audio_file(path) {
                        audio_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                }
            }
        }

        audio_files.sort();
        Ok(audio_files)
    }

    /// Keep only paths that exist, are files, and carry a supported extension.
    ///
    /// Dropped entries are logged; picking a bad file is not an error.
    pub fn validate_paths(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths
            .iter()
            .filter(|path| {
                let keep = path.is_file() && is_audio_file(path);
                if !keep {
                    tracing::warn!(path = %path.display(), "dropping unplayable pick");
                }
                keep
            })
            .cloned()
            .collect()
    }
}

/// Check if a file is a supported audio file
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
