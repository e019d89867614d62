use crate::{memberships, playlists, videos, views};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;
use vidshelf_core::{error::Result, storage::CatalogStore, types::*};

/// Local catalog backed by `SQLite`
pub struct LocalCatalog {
    pool: SqlitePool,
}

impl LocalCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and bring the schema up to date
    pub async fn open(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = crate::create_pool(database_url, max_connections).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection, waiting for in-flight queries
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

#[async_trait]
impl CatalogStore for LocalCatalog {
    // Videos
    async fn register_video(&self, video: CreateVideo) -> Result<String> {
        videos::register(&self.pool, video).await
    }

    async fn update_video_description(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<u64> {
        videos::update_description(&self.pool, name, description).await
    }

    async fn remove_video(&self, name: &str) -> Result<u64> {
        videos::remove(&self.pool, name).await
    }

    async fn get_video(&self, name: &str) -> Result<Option<Video>> {
        videos::get(&self.pool, name).await
    }

    async fn list_videos(
        &self,
        playlist_id: Option<PlaylistId>,
    ) -> Result<Vec<VideoWithPlaylists>> {
        videos::list_all(&self.pool, playlist_id).await
    }

    // Playlists
    async fn register_playlist(&self, playlist: CreatePlaylist) -> Result<PlaylistId> {
        playlists::register(&self.pool, playlist).await
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>> {
        playlists::list_all(&self.pool).await
    }

    async fn list_playlists_for_video(&self, name: &str) -> Result<Vec<Playlist>> {
        playlists::list_for_video(&self.pool, name).await
    }

    // Memberships
    async fn append_video(&self, playlist_id: PlaylistId, video_name: &str) -> Result<Appended> {
        memberships::append(&self.pool, playlist_id, video_name).await
    }

    async fn remove_from_playlist(
        &self,
        playlist_id: PlaylistId,
        video_name: &str,
    ) -> Result<u64> {
        memberships::remove(&self.pool, playlist_id, video_name).await
    }

    async fn move_video(
        &self,
        playlist_id: PlaylistId,
        video_name: &str,
        direction: Direction,
    ) -> Result<u64> {
        memberships::move_video(&self.pool, playlist_id, video_name, direction).await
    }

    async fn ordered_videos(&self, playlist_id: PlaylistId) -> Result<Vec<PlaylistEntry>> {
        views::ordered_videos_of_playlist(&self.pool, playlist_id).await
    }
}
