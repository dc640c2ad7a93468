//! Stride Player Storage
//!
//! `SQLite` persistence for Stride Player.
//!
//! The playback core has no persistence of its own; the only state that
//! survives navigation is the pair of track lists (all tracks + favourites),
//! stored here as JSON values in a key-value table.
//!
//! # Example
//!
//! ```rust,no_run
//! use stride_storage::{create_pool, library, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://stride.db").await?;
//! run_migrations(&pool).await?;
//!
//! // First launch: both lists come back empty
//! let tracks = library::load_tracks(&pool).await?;
//! let favourites = library::load_favourites(&pool).await?;
//! assert!(tracks.is_empty() && favourites.is_empty());
//! # Ok(())
//! # }
//! ```

mod error;
pub mod library;

pub use error::StorageError;

use error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Create a new `SQLite` pool, creating the database file if missing
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Run database migrations
///
/// Migrations are embedded for reliability across execution contexts; call
/// once at application startup.
///
/// # Errors
///
/// Returns an error if a migration statement fails
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    const MIGRATIONS: &[&str] = &[include_str!(
        "../migrations/20250601000001_create_app_state.sql"
    )];

    for migration in MIGRATIONS {
        sqlx::query(migration)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    Ok(())
}
