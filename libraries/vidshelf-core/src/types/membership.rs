//! Playlist membership types

use super::PlaylistId;
use crate::error::ShelfError;
use crate::ordering;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ledger row recording that a video sits in a playlist at a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Membership {
    /// Row id, increasing with insertion; breaks ties between equal positions
    pub id: i64,
    /// Owning playlist
    pub playlist_id: PlaylistId,
    /// Name of the member video
    pub video_name: String,
    /// 1-based rank. Neither dense nor unique once `move` has run.
    pub position: i64,
}

/// Result of appending a video to a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Appended {
    /// Id of the new membership row
    pub id: i64,
    /// Position assigned: one past the playlist's previous maximum
    pub position: i64,
}

/// Direction accepted by the move operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// One position earlier
    Up,
    /// One position later
    Down,
    /// Position 1
    Top,
    /// One past the playlist's current maximum
    Bottom,
}

impl Direction {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        }
    }

    /// Only `Bottom` needs the playlist's current maximum position
    pub fn needs_max_position(&self) -> bool {
        matches!(self, Direction::Bottom)
    }

    /// Position the moved membership is overwritten with
    pub fn target_position(&self, current: i64, max_position: i64) -> i64 {
        ordering::target_position(*self, current, max_position)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "top" => Ok(Direction::Top),
            "bottom" => Ok(Direction::Bottom),
            "" => Err(ShelfError::invalid_argument("Invalid direction")),
            other => Err(ShelfError::invalid_argument(format!(
                "Invalid direction: {other}"
            ))),
        }
    }
}
