//! Persistent track lists
//!
//! The two lists the playback core needs across launches are stored as
//! key-value pairs with JSON-serialized values. Missing keys read back as
//! empty lists (first launch, or before any scan).

use crate::error::{Result, StorageError};
use sqlx::{Row, SqlitePool};
use stride_core::Track;

/// Key holding the serialized "all tracks" list
pub const KEY_ALL_TRACKS: &str = "library.tracks";

/// Key holding the serialized favourites list
pub const KEY_FAVOURITES: &str = "library.favourites";

/// Get a raw JSON value by key
///
/// # Errors
///
/// Returns an error if the query fails or the stored value is not valid JSON
pub async fn get_value(pool: &SqlitePool, key: &str) -> Result<Option<serde_json::Value>> {
    let row = sqlx::query("SELECT value FROM app_state WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => {
            let raw: String = row.get("value");
            let value = serde_json::from_str(&raw)
                .map_err(|e| StorageError::Serialization(e.to_string()))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Set a raw JSON value by key (upsert)
///
/// # Errors
///
/// Returns an error if serialization or the query fails
pub async fn set_value(pool: &SqlitePool, key: &str, value: &serde_json::Value) -> Result<()> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO app_state (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(raw)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

async fn load_track_list(pool: &SqlitePool, key: &str) -> Result<Vec<Track>> {
    match get_value(pool, key).await? {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| StorageError::Serialization(e.to_string())),
        None => Ok(Vec::new()),
    }
}

async fn save_track_list(pool: &SqlitePool, key: &str, tracks: &[Track]) -> Result<()> {
    let value =
        serde_json::to_value(tracks).map_err(|e| StorageError::Serialization(e.to_string()))?;
    set_value(pool, key, &value).await
}

/// Load the persisted "all tracks" list; empty when never saved
///
/// # Errors
///
/// Returns an error if the query fails or the stored value is malformed
pub async fn load_tracks(pool: &SqlitePool) -> Result<Vec<Track>> {
    load_track_list(pool, KEY_ALL_TRACKS).await
}

/// Persist the "all tracks" list
///
/// # Errors
///
/// Returns an error if serialization or the query fails
pub async fn save_tracks(pool: &SqlitePool, tracks: &[Track]) -> Result<()> {
    save_track_list(pool, KEY_ALL_TRACKS, tracks).await
}

/// Load the persisted favourites list; empty when never saved
///
/// # Errors
///
/// Returns an error if the query fails or the stored value is malformed
pub async fn load_favourites(pool: &SqlitePool) -> Result<Vec<Track>> {
    load_track_list(pool, KEY_FAVOURITES).await
}

/// Persist the favourites list
///
/// # Errors
///
/// Returns an error if serialization or the query fails
pub async fn save_favourites(pool: &SqlitePool, tracks: &[Track]) -> Result<()> {
    save_track_list(pool, KEY_FAVOURITES, tracks).await
}
