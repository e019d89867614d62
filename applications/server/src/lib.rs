//! Vidshelf Server Library
//!
//! HTTP catalog of videos and ordered playlists backed by SQLite.
//!
//! This library exposes the router and services for the binary and for tests.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::scanner::{ScanReport, VideoScanner};
pub use state::AppState;

/// Build the HTTP router
///
/// Files under `public_dir` are served at `/public`, matching the URLs the
/// scanner registers.
pub fn create_router(app_state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        // Videos
        .route(
            "/videos",
            get(api::videos::list_videos).post(api::videos::create_video),
        )
        .route(
            "/videos/:name",
            put(api::videos::update_video).delete(api::videos::delete_video),
        )
        .route(
            "/videos/:name/playlists",
            get(api::videos::list_video_playlists),
        )
        // Playlists
        .route(
            "/playlists",
            get(api::playlists::list_playlists).post(api::playlists::create_playlist),
        )
        .route(
            "/playlists/:playlist_id/videos",
            get(api::playlists::list_playlist_videos),
        )
        .route(
            "/playlists/:playlist_id/videos/:video_name",
            post(api::playlists::add_video_to_playlist)
                .delete(api::playlists::remove_video_from_playlist),
        )
        .route(
            "/playlists/:playlist_id/videos/:video_name/move",
            post(api::playlists::move_video),
        )
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
