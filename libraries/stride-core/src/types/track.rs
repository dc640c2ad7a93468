/// Track domain type
use serde::{Deserialize, Serialize};

/// A playable audio resource.
///
/// Identity is the `uri`: two tracks are the same track exactly when their
/// URIs are equal, which is the key used for favourites membership. A track
/// is immutable once listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Opaque resource locator (file path, asset URI)
    pub uri: String,

    /// Display name, typically the file name
    pub name: String,
}

impl Track {
    /// Create a new track
    pub fn new(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
        }
    }

    /// Whether this track refers to the same resource as `other`
    pub fn same_resource(&self, other: &Track) -> bool {
        self.uri == other.uri
    }
}
