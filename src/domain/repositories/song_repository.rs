//! Repository trait for song storage.

use std::num::NonZeroU32;

use crate::domain::entities::{NewSong, Song};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter criteria for listing songs.
///
/// `group` and `title` are case-insensitive substring matches,
/// `release_date` is an exact match. Empty strings are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongFilter {
    pub group: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub page: NonZeroU32,
    pub page_size: NonZeroU32,
}

impl SongFilter {
    /// Creates an unfiltered query for the given page.
    pub fn new(page: NonZeroU32, page_size: NonZeroU32) -> Self {
        Self {
            group: None,
            title: None,
            release_date: None,
            page,
            page_size,
        }
    }

    pub fn with_group(mut self, group: Option<String>) -> Self {
        self.group = group.filter(|g| !g.is_empty());
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.filter(|t| !t.is_empty());
        self
    }

    pub fn with_release_date(mut self, release_date: Option<String>) -> Self {
        self.release_date = release_date.filter(|d| !d.is_empty());
        self
    }

    /// Number of rows skipped before this page, saturating at `i64::MAX`.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page.get()) - 1).saturating_mul(i64::from(self.page_size.get()))
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size.get())
    }
}

/// Repository interface for the song catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSongRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_song.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Lists one page of songs matching the filter, ordered by id.
    ///
    /// Returns an empty vector when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find(&self, filter: SongFilter) -> Result<Vec<Song>, AppError>;

    /// Inserts a new song and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the insert fails, including constraint
    /// violations.
    async fn create(&self, new_song: NewSong) -> Result<Song, AppError>;

    /// Deletes a song by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Overwrites every mutable field of an existing song.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no song has `song.id`.
    /// Returns [`AppError::Storage`] on database errors.
    async fn update(&self, song: Song) -> Result<Song, AppError>;

    /// Finds a song by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no song has this id.
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Song, AppError>;

    /// Counts all songs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
