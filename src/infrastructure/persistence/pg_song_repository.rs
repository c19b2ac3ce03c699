//! PostgreSQL implementation of the song repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewSong, Song};
use crate::domain::repositories::{SongFilter, SongRepository};
use crate::error::AppError;

const SONG_COLUMNS: &str = r#"id, "group", title, release_date, text, link"#;

#[derive(Debug, FromRow)]
struct SongRow {
    id: i64,
    group: String,
    title: String,
    release_date: String,
    text: String,
    link: String,
}

impl From<SongRow> for Song {
    fn from(r: SongRow) -> Self {
        Song::new(r.id, r.group, r.title, r.release_date, r.text, r.link)
    }
}

/// Builds an `ILIKE` pattern matching `value` anywhere, with LIKE
/// metacharacters in `value` taken literally.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// PostgreSQL repository for the `songs` table.
///
/// List queries are assembled with [`QueryBuilder`] so that only the filters
/// actually present end up in the `WHERE` clause; every value is bound.
pub struct PgSongRepository {
    pool: Arc<PgPool>,
}

impl PgSongRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongRepository for PgSongRepository {
    async fn find(&self, filter: SongFilter) -> Result<Vec<Song>, AppError> {
        let mut query =
            QueryBuilder::<Postgres>::new(format!("SELECT {SONG_COLUMNS} FROM songs WHERE TRUE"));

        if let Some(group) = &filter.group {
            query
                .push(r#" AND "group" ILIKE "#)
                .push_bind(contains_pattern(group));
        }
        if let Some(title) = &filter.title {
            query
                .push(" AND title ILIKE ")
                .push_bind(contains_pattern(title));
        }
        if let Some(release_date) = &filter.release_date {
            query
                .push(" AND release_date = ")
                .push_bind(release_date.clone());
        }

        query
            .push(" ORDER BY id LIMIT ")
            .push_bind(filter.limit())
            .push(" OFFSET ")
            .push_bind(filter.offset());

        tracing::debug!(?filter, "Executing song list query");

        let rows = query
            .build_query_as::<SongRow>()
            .fetch_all(self.pool.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, ?filter, "Failed to list songs"))?;

        Ok(rows.into_iter().map(Song::from).collect())
    }

    async fn create(&self, new_song: NewSong) -> Result<Song, AppError> {
        let row = sqlx::query_as::<_, SongRow>(&format!(
            r#"
            INSERT INTO songs ("group", title, release_date, text, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SONG_COLUMNS}
            "#
        ))
        .bind(&new_song.group)
        .bind(&new_song.title)
        .bind(&new_song.release_date)
        .bind(&new_song.text)
        .bind(&new_song.link)
        .fetch_one(self.pool.as_ref())
        .await
        .inspect_err(|e| {
            tracing::error!(
                error = %e,
                group = %new_song.group,
                title = %new_song.title,
                "Failed to insert song"
            )
        })?;

        tracing::info!(song_id = row.id, group = %row.group, title = %row.title, "Song created");

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, song_id = id, "Failed to delete song"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, song: Song) -> Result<Song, AppError> {
        let row = sqlx::query_as::<_, SongRow>(&format!(
            r#"
            UPDATE songs
            SET "group" = $2, title = $3, release_date = $4, text = $5, link = $6
            WHERE id = $1
            RETURNING {SONG_COLUMNS}
            "#
        ))
        .bind(song.id)
        .bind(&song.group)
        .bind(&song.title)
        .bind(&song.release_date)
        .bind(&song.text)
        .bind(&song.link)
        .fetch_optional(self.pool.as_ref())
        .await
        .inspect_err(|e| tracing::error!(error = %e, song_id = song.id, "Failed to update song"))?;

        row.map(Song::from)
            .ok_or_else(|| AppError::not_found("Song not found", json!({ "id": song.id })))
    }

    async fn find_by_id(&self, id: i64) -> Result<Song, AppError> {
        let row = sqlx::query_as::<_, SongRow>(&format!(
            "SELECT {SONG_COLUMNS} FROM songs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .inspect_err(|e| tracing::error!(error = %e, song_id = id, "Failed to fetch song"))?;

        row.map(Song::from)
            .ok_or_else(|| AppError::not_found("Song not found", json!({ "id": id })))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM songs")
            .fetch_one(self.pool.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to count songs"))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_wraps_value() {
        assert_eq!(contains_pattern("mus"), "%mus%");
    }

    #[test]
    fn test_contains_pattern_escapes_metacharacters() {
        assert_eq!(contains_pattern("100%"), r"%100\%%");
        assert_eq!(contains_pattern("a_b"), r"%a\_b%");
        assert_eq!(contains_pattern(r"back\slash"), r"%back\\slash%");
    }
}
