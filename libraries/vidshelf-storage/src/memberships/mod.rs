//! Membership ledger: which videos sit in which playlist, and in what order
//!
//! Positions are 1-based per playlist. `append` places a video after the
//! current maximum, `remove` leaves gaps behind, and `move_video` overwrites
//! one position without shifting siblings. Duplicate (playlist, video) pairs
//! are not rejected.

use crate::classify;
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use tracing::{debug, warn};
use vidshelf_core::{
    error::Result,
    types::{Appended, Direction, Membership, PlaylistId},
    ShelfError,
};

#[derive(Debug, FromRow)]
struct PositionRow {
    position: i64,
}

#[derive(Debug, FromRow)]
struct MaxPositionRow {
    max_position: Option<i64>,
}

fn membership_key(playlist_id: PlaylistId, video_name: &str) -> String {
    format!("{playlist_id}/{video_name}")
}

/// Append a video to the end of a playlist
///
/// Reading the current maximum and inserting happen in one statement, so
/// concurrent appends to the same playlist cannot share a position. A missing
/// playlist or video fails the foreign key and surfaces as `NotFound`.
pub async fn append(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    video_name: &str,
) -> Result<Appended> {
    let appended = sqlx::query_as::<_, Appended>(
        r#"
        INSERT INTO playlist_videos (playlist_id, video_name, position)
        SELECT ?, ?, COALESCE(MAX(position), 0) + 1
        FROM playlist_videos
        WHERE playlist_id = ?
        RETURNING id, position
        "#,
    )
    .bind(playlist_id)
    .bind(video_name)
    .bind(playlist_id)
    .fetch_one(pool)
    .await
    .map_err(|e| classify(e, "Playlist or video", &membership_key(playlist_id, video_name)))?;

    debug!(
        playlist_id,
        video_name,
        id = appended.id,
        position = appended.position,
        "Appended video to playlist"
    );

    Ok(appended)
}

/// Remove a video from a playlist
///
/// Deletes every matching membership and returns how many went. Remaining
/// positions are left as they are.
pub async fn remove(pool: &SqlitePool, playlist_id: PlaylistId, video_name: &str) -> Result<u64> {
    let result =
        sqlx::query("DELETE FROM playlist_videos WHERE playlist_id = ? AND video_name = ?")
            .bind(playlist_id)
            .bind(video_name)
            .execute(pool)
            .await?;

    debug!(
        playlist_id,
        video_name,
        removed = result.rows_affected(),
        "Removed video from playlist"
    );

    Ok(result.rows_affected())
}

/// Move a video within a playlist
///
/// The current position is read from the oldest matching membership; the
/// computed position is then written to every matching membership. Siblings
/// are never touched, so the result may collide with another row's position.
///
/// Runs under `BEGIN IMMEDIATE`: under WAL a deferred transaction that has
/// already read cannot take the write lock once another writer commits, while
/// an immediate one waits on `busy_timeout` instead.
pub async fn move_video(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    video_name: &str,
    direction: Direction,
) -> Result<u64> {
    let mut conn = pool.acquire().await?;

    sqlx::query("BEGIN IMMEDIATE").execute(&mut *conn).await?;

    let outcome = move_locked(&mut conn, playlist_id, video_name, direction).await;

    let finish = if outcome.is_ok() { "COMMIT" } else { "ROLLBACK" };
    if let Err(e) = sqlx::query(finish).execute(&mut *conn).await {
        // Closing the connection rolls back whatever is still open
        warn!(error = %e, statement = finish, "Failed to end move; discarding connection");
        conn.close_on_drop();
        outcome?;
        return Err(e.into());
    }

    let (from, to, updated) = outcome?;

    debug!(
        playlist_id,
        video_name,
        %direction,
        from,
        to,
        "Moved video within playlist"
    );

    Ok(updated)
}

/// Body of `move_video`, run with the write lock held
///
/// Returns the old position, the new position and the number of rows written.
async fn move_locked(
    conn: &mut SqliteConnection,
    playlist_id: PlaylistId,
    video_name: &str,
    direction: Direction,
) -> Result<(i64, i64, u64)> {
    let current = sqlx::query_as::<_, PositionRow>(
        r#"
        SELECT position
        FROM playlist_videos
        WHERE playlist_id = ? AND video_name = ?
        ORDER BY id ASC
        LIMIT 1
        "#,
    )
    .bind(playlist_id)
    .bind(video_name)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(current) = current else {
        return Err(ShelfError::not_found(
            "Membership",
            membership_key(playlist_id, video_name),
        ));
    };

    let max_position = if direction.needs_max_position() {
        sqlx::query_as::<_, MaxPositionRow>(
            "SELECT MAX(position) AS max_position FROM playlist_videos WHERE playlist_id = ?",
        )
        .bind(playlist_id)
        .fetch_one(&mut *conn)
        .await?
        .max_position
        .unwrap_or(current.position)
    } else {
        current.position
    };

    let new_position = direction.target_position(current.position, max_position);

    let result = sqlx::query(
        "UPDATE playlist_videos SET position = ? WHERE playlist_id = ? AND video_name = ?",
    )
    .bind(new_position)
    .bind(playlist_id)
    .bind(video_name)
    .execute(&mut *conn)
    .await?;

    Ok((current.position, new_position, result.rows_affected()))
}

/// Raw ledger rows of a playlist, ordered by position then insertion
pub async fn list(pool: &SqlitePool, playlist_id: PlaylistId) -> Result<Vec<Membership>> {
    let memberships = sqlx::query_as::<_, Membership>(
        r#"
        SELECT id, playlist_id, video_name, position
        FROM playlist_videos
        WHERE playlist_id = ?
        ORDER BY position ASC, id ASC
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(memberships)
}
