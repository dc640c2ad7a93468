//! Track lists and favourites
//!
//! Two independent ordered lists ("all tracks" and favourites) plus the
//! selector naming which one navigation operates over. Favourite membership
//! is keyed by track URI; the favourites list is itself the membership set,
//! in user insertion order.

use crate::types::ActiveList;
use stride_core::Track;

/// The controller's view of the two track lists
#[derive(Debug, Clone, Default)]
pub struct TrackLists {
    all: Vec<Track>,
    favourites: Vec<Track>,
    active: ActiveList,
}

impl TrackLists {
    /// Create lists from previously persisted contents
    pub fn new(all: Vec<Track>, favourites: Vec<Track>) -> Self {
        Self {
            all,
            favourites,
            active: ActiveList::All,
        }
    }

    /// The list navigation currently operates over
    pub fn active(&self) -> ActiveList {
        self.active
    }

    /// Switch which list navigation operates over
    pub fn set_active(&mut self, list: ActiveList) {
        self.active = list;
    }

    /// Resolve the selector to a concrete list
    pub fn active_tracks(&self) -> &[Track] {
        match self.active {
            ActiveList::All => &self.all,
            ActiveList::Favourites => &self.favourites,
        }
    }

    /// The full "all tracks" list
    pub fn all(&self) -> &[Track] {
        &self.all
    }

    /// The favourites list
    pub fn favourites(&self) -> &[Track] {
        &self.favourites
    }

    /// Replace the "all tracks" list (result of a fresh media scan)
    pub fn replace_all(&mut self, tracks: Vec<Track>) {
        self.all = tracks;
    }

    /// Append user-picked tracks to the favourites list
    pub fn add_favourites(&mut self, tracks: Vec<Track>) {
        self.favourites.extend(tracks);
    }

    /// Whether a URI is in the favourites set
    pub fn is_favourite(&self, uri: &str) -> bool {
        self.favourites.iter().any(|track| track.uri == uri)
    }

    /// Toggle favourites membership for a track.
    ///
    /// Returns the new membership state. Removal drops every entry with the
    /// track's URI.
    pub fn toggle_favourite(&mut self, track: &Track) -> bool {
        if self.is_favourite(&track.uri) {
            self.favourites.retain(|t| t.uri != track.uri);
            false
        } else {
            self.favourites.push(track.clone());
            true
        }
    }

    /// Position of a URI in the currently active list
    pub fn position_in_active(&self, uri: &str) -> Option<usize> {
        self.active_tracks().iter().position(|track| track.uri == uri)
    }
}
