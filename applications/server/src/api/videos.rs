/// Videos API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use vidshelf_core::types::{CreateVideo, Playlist, PlaylistId, VideoWithPlaylists};

#[derive(Debug, Deserialize)]
pub struct UpdateVideoRequest {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListVideosQuery {
    #[serde(default, rename = "listId")]
    pub list_id: Option<String>,
}

impl ListVideosQuery {
    /// An absent or empty `listId` means no filter
    fn playlist_id(&self) -> Result<Option<PlaylistId>> {
        match self.list_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ServerError::BadRequest(format!("Invalid listId: {raw}"))),
        }
    }
}

/// POST /videos
pub async fn create_video(
    State(app_state): State<AppState>,
    Json(req): Json<CreateVideo>,
) -> Result<Json<Value>> {
    let name = app_state.catalog.register_video(req).await?;
    Ok(Json(json!({ "name": name })))
}

/// PUT /videos/:name
/// Replace the description of a video
pub async fn update_video(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
    Json(req): Json<UpdateVideoRequest>,
) -> Result<Json<Value>> {
    let updated = app_state
        .catalog
        .update_video_description(&name, req.description)
        .await?;
    Ok(Json(json!({ "updated": updated })))
}

/// DELETE /videos/:name
pub async fn delete_video(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Value>> {
    let deleted = app_state.catalog.remove_video(&name).await?;
    Ok(Json(json!({ "deleted": deleted })))
}

/// GET /videos?listId=
/// All videos with their playlists, or only the members of one playlist
pub async fn list_videos(
    State(app_state): State<AppState>,
    Query(query): Query<ListVideosQuery>,
) -> Result<Json<Vec<VideoWithPlaylists>>> {
    let videos = app_state.catalog.list_videos(query.playlist_id()?).await?;
    Ok(Json(videos))
}

/// GET /videos/:name/playlists
pub async fn list_video_playlists(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = app_state.catalog.list_playlists_for_video(&name).await?;
    Ok(Json(playlists))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(list_id: Option<&str>) -> ListVideosQuery {
        ListVideosQuery {
            list_id: list_id.map(str::to_string),
        }
    }

    #[test]
    fn test_list_id_parsing() {
        assert_eq!(query(None).playlist_id().unwrap(), None);
        assert_eq!(query(Some("")).playlist_id().unwrap(), None);
        assert_eq!(query(Some("7")).playlist_id().unwrap(), Some(7));
        assert!(matches!(
            query(Some("seven")).playlist_id(),
            Err(ServerError::BadRequest(_))
        ));
    }
}
