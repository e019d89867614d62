//! Core error types for Vidshelf

use thiserror::Error;

/// Result type alias using `ShelfError`
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Vidshelf
#[derive(Error, Debug)]
pub enum ShelfError {
    /// A create collided with an existing primary key
    #[error("{entity} already exists: {key}")]
    DuplicateKey {
        /// Kind of entity being created
        entity: String,
        /// Key that collided
        key: String,
    },

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Identifier used for the lookup
        id: String,
    },

    /// Caller supplied a value the engine does not understand
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Any storage error not classified above
    #[error("Storage failure: {0}")]
    StorageFailure(String),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(String),
}

impl ShelfError {
    /// Create a duplicate key error
    pub fn duplicate_key(entity: impl Into<String>, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            entity: entity.into(),
            key: key.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a storage failure
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for ShelfError {
    fn from(err: sqlx::Error) -> Self {
        Self::StorageFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ShelfError::duplicate_key("Video", "a.mp4").to_string(),
            "Video already exists: a.mp4"
        );
        assert_eq!(
            ShelfError::not_found("Membership", "1/a.mp4").to_string(),
            "Membership not found: 1/a.mp4"
        );
        assert_eq!(
            ShelfError::invalid_argument("Invalid direction").to_string(),
            "Invalid argument: Invalid direction"
        );
    }
}
