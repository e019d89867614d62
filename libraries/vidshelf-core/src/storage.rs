//! Storage trait for the video catalog

use crate::error::Result;
use crate::types::{
    Appended, CreatePlaylist, CreateVideo, Direction, Playlist, PlaylistEntry, PlaylistId, Video,
    VideoWithPlaylists,
};
use async_trait::async_trait;

/// Catalog store providing every registry, ledger and view operation
///
/// Implementations receive their storage handle at construction; nothing in
/// this trait reaches for process-wide state.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // ========================================================================
    // Videos
    // ========================================================================

    /// Register a video. Fails with `DuplicateKey` if the name is taken.
    async fn register_video(&self, video: CreateVideo) -> Result<String>;

    /// Replace a video's description, returning the number of rows touched
    async fn update_video_description(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<u64>;

    /// Delete a video and, through the cascade, all of its memberships
    async fn remove_video(&self, name: &str) -> Result<u64>;

    /// Get a video by name
    async fn get_video(&self, name: &str) -> Result<Option<Video>>;

    /// List videos with their playlists, optionally restricted to one playlist
    async fn list_videos(&self, playlist_id: Option<PlaylistId>)
        -> Result<Vec<VideoWithPlaylists>>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Create a playlist and return its generated id
    async fn register_playlist(&self, playlist: CreatePlaylist) -> Result<PlaylistId>;

    /// Get all playlists
    async fn list_playlists(&self) -> Result<Vec<Playlist>>;

    /// Get the playlists that contain a video
    async fn list_playlists_for_video(&self, name: &str) -> Result<Vec<Playlist>>;

    // ========================================================================
    // Memberships
    // ========================================================================

    /// Append a video to the end of a playlist
    async fn append_video(&self, playlist_id: PlaylistId, video_name: &str) -> Result<Appended>;

    /// Remove a video from a playlist without renumbering the rest
    async fn remove_from_playlist(&self, playlist_id: PlaylistId, video_name: &str)
        -> Result<u64>;

    /// Overwrite a membership's position according to `direction`
    async fn move_video(
        &self,
        playlist_id: PlaylistId,
        video_name: &str,
        direction: Direction,
    ) -> Result<u64>;

    /// Videos of a playlist in ascending position order
    async fn ordered_videos(&self, playlist_id: PlaylistId) -> Result<Vec<PlaylistEntry>>;
}
