//! Playlist types

use serde::{Deserialize, Serialize};

/// Playlist identifier (SQLite `AUTOINCREMENT` rowid)
pub type PlaylistId = i64;

/// Named, ordered collection of videos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Playlist {
    /// Assigned on creation, starting at 1
    pub id: PlaylistId,
    /// Display name; not required to be unique
    pub name: String,
    /// Free text, absent until set
    pub description: Option<String>,
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    /// Display name
    pub name: String,
    /// Optional free text
    #[serde(default)]
    pub description: Option<String>,
}

impl CreatePlaylist {
    /// New playlist with no description
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}
