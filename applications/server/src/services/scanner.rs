//! Directory scanning for video files
//!
//! Discovered files are registered under their file name, with a URL pointing
//! at the `/public` static route.

use crate::error::{Result, ServerError};
use std::path::{Component, Path};
use vidshelf_core::{CatalogStore, CreateVideo, ShelfError};
use walkdir::WalkDir;

/// Supported video file extensions
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "flv"];

/// A video file found on disk, ready to be registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredVideo {
    pub name: String,
    pub url: String,
}

impl From<DiscoveredVideo> for CreateVideo {
    fn from(video: DiscoveredVideo) -> Self {
        CreateVideo::new(video.name, video.url)
    }
}

/// Outcome of a registration pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub registered: usize,
    pub skipped: usize,
}

/// Scanner for video files in a directory tree
#[derive(Debug, Default)]
pub struct VideoScanner {
    follow_links: bool,
}

impl VideoScanner {
    /// Create a new video scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Walk `root` recursively and collect video files in file name order
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<DiscoveredVideo>> {
        if !root.is_dir() {
            return Err(ServerError::NotFound(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        let mut videos = Vec::new();
        for entry in walker.into_iter() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_video_file(entry.path()) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };

            videos.push(DiscoveredVideo {
                name: entry.file_name().to_string_lossy().into_owned(),
                url: public_url(relative),
            });
        }

        Ok(videos)
    }

    /// Register discovered videos, skipping names the catalog already holds
    pub async fn register_all(
        &self,
        catalog: &dyn CatalogStore,
        videos: Vec<DiscoveredVideo>,
    ) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        for video in videos {
            if catalog.get_video(&video.name).await?.is_some() {
                tracing::debug!(video = %video.name, "Already registered");
                report.skipped += 1;
                continue;
            }

            let name = video.name.clone();
            match catalog.register_video(video.into()).await {
                Ok(_) => {
                    tracing::info!(video = %name, "Registered");
                    report.registered += 1;
                }
                Err(ShelfError::DuplicateKey { .. }) => {
                    tracing::debug!(video = %name, "Duplicate file name");
                    report.skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(report)
    }
}

/// Check if a file has a supported video extension (case-insensitive)
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Static URL for a path relative to the public directory
///
/// Always uses forward slashes, whatever the host separator.
pub fn public_url(relative: &Path) -> String {
    let segments: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    format!("/public/{}", segments.join("/"))
}
