//! Joined read views produced by the query composer

use super::{Playlist, Video};
use serde::{Deserialize, Serialize};

/// A video as listed inside one playlist, with its rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// The member video, serialized inline
    #[serde(flatten)]
    pub video: Video,
    /// Position of the membership inside the playlist
    pub position: i64,
}

/// A video together with the playlists that reference it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoWithPlaylists {
    /// The video, serialized inline
    #[serde(flatten)]
    pub video: Video,
    /// Playlists containing the video, in membership order
    pub lists: Vec<Playlist>,
}

impl VideoWithPlaylists {
    /// Name of the wrapped video
    pub fn name(&self) -> &str {
        &self.video.name
    }
}
