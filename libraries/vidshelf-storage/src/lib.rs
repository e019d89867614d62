//! Vidshelf Storage
//!
//! `SQLite` database layer for the Vidshelf video catalog.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each feature owns its own queries and logic
//!   (`videos`, `playlists`, `memberships`, `views`)
//! - **Injected Handle**: Every query takes the pool it runs on; `LocalCatalog`
//!   owns one pool and implements `CatalogStore` over it
//! - **Typed Rows**: Each query decodes into a concrete `FromRow` record
//!
//! # Example
//!
//! ```rust,no_run
//! use vidshelf_core::CatalogStore;
//! use vidshelf_storage::LocalCatalog;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = LocalCatalog::open("sqlite://database.sqlite", 5).await?;
//!
//! let playlists = catalog.list_playlists().await?;
//!
//! catalog.close().await;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod memberships;
pub mod playlists;
pub mod videos;
pub mod views;

pub use context::LocalCatalog;
pub use error::classify;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use tracing::{debug, info};
use vidshelf_core::{Result, ShelfError};

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| ShelfError::Migration(e.to_string()))?;

    info!("Database migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://database.sqlite`)
/// * `max_connections` - Upper bound on pooled connections
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    info!(database_url, max_connections, "Creating database pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        // Cascade delete of memberships depends on this
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    debug!("SQLite connection options configured");

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!("Database pool created");

    Ok(pool)
}
