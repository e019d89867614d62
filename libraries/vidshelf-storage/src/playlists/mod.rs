use crate::views;
use sqlx::SqlitePool;
use tracing::debug;
use vidshelf_core::{
    error::Result,
    types::{CreatePlaylist, Playlist, PlaylistId},
};

/// Create new playlist, returning its generated id
pub async fn register(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<PlaylistId> {
    let result = sqlx::query("INSERT INTO playlists (name, description) VALUES (?, ?)")
        .bind(&playlist.name)
        .bind(&playlist.description)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();
    debug!(id, name = %playlist.name, "Created playlist");

    Ok(id)
}

/// Get playlist by ID
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let playlist = sqlx::query_as::<_, Playlist>(
        "SELECT id, name, description FROM playlists WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(playlist)
}

/// Get all playlists
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    let playlists = sqlx::query_as::<_, Playlist>(
        "SELECT id, name, description FROM playlists ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(playlists)
}

/// Get the playlists containing a video
pub async fn list_for_video(pool: &SqlitePool, name: &str) -> Result<Vec<Playlist>> {
    views::playlists_of_video(pool, name).await
}
