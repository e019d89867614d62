//! Read-only joined views over videos, playlists and memberships

use sqlx::{FromRow, SqlitePool};
use std::collections::HashMap;
use vidshelf_core::{
    error::Result,
    types::{Playlist, PlaylistEntry, PlaylistId, Video, VideoWithPlaylists},
};

#[derive(Debug, FromRow)]
struct EntryRow {
    name: String,
    url: String,
    description: Option<String>,
    position: i64,
}

/// One video joined with at most one of its playlists
#[derive(Debug, FromRow)]
struct VideoPlaylistRow {
    name: String,
    url: String,
    description: Option<String>,
    playlist_id: Option<PlaylistId>,
    playlist_name: Option<String>,
    playlist_description: Option<String>,
}

/// Videos of a playlist in ascending position order
///
/// Ties on position fall back to insertion order.
pub async fn ordered_videos_of_playlist(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
) -> Result<Vec<PlaylistEntry>> {
    let rows = sqlx::query_as::<_, EntryRow>(
        r#"
        SELECT v.name, v.url, v.description, pv.position
        FROM playlist_videos pv
        INNER JOIN videos v ON pv.video_name = v.name
        WHERE pv.playlist_id = ?
        ORDER BY pv.position ASC, pv.id ASC
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| PlaylistEntry {
            video: Video {
                name: row.name,
                url: row.url,
                description: row.description,
            },
            position: row.position,
        })
        .collect())
}

/// Videos together with their playlists
///
/// Without a filter every video is returned, sorted by name, and a video with
/// no memberships carries an empty `lists`. With a filter only members of that
/// playlist are returned, in position order, and `lists` holds just the
/// filtered playlist.
pub async fn videos_with_playlists(
    pool: &SqlitePool,
    playlist_id: Option<PlaylistId>,
) -> Result<Vec<VideoWithPlaylists>> {
    let rows = match playlist_id {
        None => {
            sqlx::query_as::<_, VideoPlaylistRow>(
                r#"
                SELECT v.name, v.url, v.description,
                       p.id AS playlist_id, p.name AS playlist_name,
                       p.description AS playlist_description
                FROM videos v
                LEFT JOIN playlist_videos pv ON v.name = pv.video_name
                LEFT JOIN playlists p ON pv.playlist_id = p.id
                ORDER BY v.name ASC, pv.id ASC
                "#,
            )
            .fetch_all(pool)
            .await?
        }
        Some(id) => {
            sqlx::query_as::<_, VideoPlaylistRow>(
                r#"
                SELECT v.name, v.url, v.description,
                       p.id AS playlist_id, p.name AS playlist_name,
                       p.description AS playlist_description
                FROM videos v
                INNER JOIN playlist_videos pv ON v.name = pv.video_name
                INNER JOIN playlists p ON pv.playlist_id = p.id
                WHERE p.id = ?
                ORDER BY pv.position ASC, pv.id ASC
                "#,
            )
            .bind(id)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(group_by_video(rows))
}

/// Fold joined rows into one entry per video, keeping first-seen order
fn group_by_video(rows: Vec<VideoPlaylistRow>) -> Vec<VideoWithPlaylists> {
    let mut videos: Vec<VideoWithPlaylists> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let slot = match index.get(&row.name) {
            Some(&slot) => slot,
            None => {
                index.insert(row.name.clone(), videos.len());
                videos.push(VideoWithPlaylists {
                    video: Video {
                        name: row.name,
                        url: row.url,
                        description: row.description,
                    },
                    lists: Vec::new(),
                });
                videos.len() - 1
            }
        };

        if let (Some(id), Some(name)) = (row.playlist_id, row.playlist_name) {
            videos[slot].lists.push(Playlist {
                id,
                name,
                description: row.playlist_description,
            });
        }
    }

    videos
}

/// Playlists that contain a video, in the order it was added to them
pub async fn playlists_of_video(pool: &SqlitePool, name: &str) -> Result<Vec<Playlist>> {
    let playlists = sqlx::query_as::<_, Playlist>(
        r#"
        SELECT p.id, p.name, p.description
        FROM playlists p
        INNER JOIN playlist_videos pv ON p.id = pv.playlist_id
        WHERE pv.video_name = ?
        ORDER BY pv.id ASC
        "#,
    )
    .bind(name)
    .fetch_all(pool)
    .await?;

    Ok(playlists)
}
