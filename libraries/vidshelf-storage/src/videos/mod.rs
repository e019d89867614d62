//! Video registry queries

use crate::{classify, views};
use sqlx::SqlitePool;
use tracing::debug;
use vidshelf_core::{
    error::Result,
    types::{CreateVideo, PlaylistId, Video, VideoWithPlaylists},
};

/// Register a new video
///
/// Returns the video name, which is also its key. A second registration
/// under the same name fails with `DuplicateKey`.
pub async fn register(pool: &SqlitePool, video: CreateVideo) -> Result<String> {
    sqlx::query("INSERT INTO videos (name, url, description) VALUES (?, ?, ?)")
        .bind(&video.name)
        .bind(&video.url)
        .bind(&video.description)
        .execute(pool)
        .await
        .map_err(|e| classify(e, "Video", &video.name))?;

    debug!(name = %video.name, url = %video.url, "Registered video");

    Ok(video.name)
}

/// Get video by name
pub async fn get(pool: &SqlitePool, name: &str) -> Result<Option<Video>> {
    let video = sqlx::query_as::<_, Video>(
        "SELECT name, url, description FROM videos WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(video)
}

/// Replace a video's description
///
/// Returns the number of rows updated; 0 when no such video exists.
pub async fn update_description(
    pool: &SqlitePool,
    name: &str,
    description: Option<String>,
) -> Result<u64> {
    let result = sqlx::query("UPDATE videos SET description = ? WHERE name = ?")
        .bind(description)
        .bind(name)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Delete a video
///
/// Memberships referencing the video go with it (`ON DELETE CASCADE`).
pub async fn remove(pool: &SqlitePool, name: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM videos WHERE name = ?")
        .bind(name)
        .execute(pool)
        .await?;

    debug!(name, deleted = result.rows_affected(), "Removed video");

    Ok(result.rows_affected())
}

/// List videos with the playlists they belong to
pub async fn list_all(
    pool: &SqlitePool,
    playlist_id: Option<PlaylistId>,
) -> Result<Vec<VideoWithPlaylists>> {
    views::videos_with_playlists(pool, playlist_id).await
}
