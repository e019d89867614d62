//! Catalog data types

mod membership;
mod playlist;
mod video;
mod views;

pub use membership::{Appended, Direction, Membership};
pub use playlist::{CreatePlaylist, Playlist, PlaylistId};
pub use video::{CreateVideo, Video};
pub use views::{PlaylistEntry, VideoWithPlaylists};
