//! Video catalog types

use serde::{Deserialize, Serialize};

/// Catalog entry, keyed by its unique name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Video {
    /// Unique name, usually the file name
    pub name: String,
    /// Where the file is served from, e.g. `/public/clips/a.mp4`
    pub url: String,
    /// Free text, absent until set
    pub description: Option<String>,
}

/// Data for registering a new video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideo {
    /// Must not already be registered
    pub name: String,
    /// Where the file is served from
    pub url: String,
    /// Optional free text
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateVideo {
    /// New video with no description
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
