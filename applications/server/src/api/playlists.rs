/// Playlists API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use vidshelf_core::types::{CreatePlaylist, Direction, Playlist, PlaylistEntry, PlaylistId};

#[derive(Debug, Deserialize)]
pub struct MoveVideoRequest {
    /// "up", "down", "top" or "bottom"
    #[serde(default)]
    pub direction: String,
}

/// GET /playlists
pub async fn list_playlists(State(app_state): State<AppState>) -> Result<Json<Vec<Playlist>>> {
    let playlists = app_state.catalog.list_playlists().await?;
    Ok(Json(playlists))
}

/// POST /playlists
pub async fn create_playlist(
    State(app_state): State<AppState>,
    Json(req): Json<CreatePlaylist>,
) -> Result<Json<Value>> {
    let id = app_state.catalog.register_playlist(req).await?;
    Ok(Json(json!({ "id": id })))
}

/// GET /playlists/:playlist_id/videos
/// Videos of a playlist in position order
pub async fn list_playlist_videos(
    Path(playlist_id): Path<PlaylistId>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<PlaylistEntry>>> {
    let entries = app_state.catalog.ordered_videos(playlist_id).await?;
    Ok(Json(entries))
}

/// POST /playlists/:playlist_id/videos/:video_name
/// Append a video to the end of a playlist
pub async fn add_video_to_playlist(
    Path((playlist_id, video_name)): Path<(PlaylistId, String)>,
    State(app_state): State<AppState>,
) -> Result<Json<Value>> {
    let appended = app_state
        .catalog
        .append_video(playlist_id, &video_name)
        .await?;
    Ok(Json(json!({ "id": appended.id })))
}

/// DELETE /playlists/:playlist_id/videos/:video_name
pub async fn remove_video_from_playlist(
    Path((playlist_id, video_name)): Path<(PlaylistId, String)>,
    State(app_state): State<AppState>,
) -> Result<Json<Value>> {
    app_state
        .catalog
        .remove_from_playlist(playlist_id, &video_name)
        .await?;
    Ok(Json(json!({ "message": "Video removed from playlist" })))
}

/// POST /playlists/:playlist_id/videos/:video_name/move
/// Reposition a video; unknown directions are rejected before touching storage
///
/// A missing or unreadable body counts as an empty direction.
pub async fn move_video(
    Path((playlist_id, video_name)): Path<(PlaylistId, String)>,
    State(app_state): State<AppState>,
    req: Option<Json<MoveVideoRequest>>,
) -> Result<Json<Value>> {
    let direction: Direction = req
        .map(|Json(req)| req.direction)
        .unwrap_or_default()
        .parse()?;

    let updated = app_state
        .catalog
        .move_video(playlist_id, &video_name, direction)
        .await?;
    Ok(Json(json!({ "updated": updated })))
}
