//! Vidshelf Core
//!
//! Storage-agnostic domain types, traits, and error handling for the
//! Vidshelf video catalog.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Video`, `Playlist`, `Membership` and the joined read views
//! - **Ordering Rules**: `Direction` and the pure position arithmetic behind `move`
//! - **Store Trait**: `CatalogStore`, implemented by `vidshelf-storage`
//! - **Error Handling**: Unified `ShelfError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vidshelf_core::types::Direction;
//!
//! let direction: Direction = "top".parse().unwrap();
//! assert_eq!(direction.target_position(5, 9), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod ordering;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ShelfError};
pub use storage::CatalogStore;

pub use types::{
    Appended, CreatePlaylist, CreateVideo, Direction, Membership, Playlist, PlaylistEntry,
    PlaylistId, Video, VideoWithPlaylists,
};
