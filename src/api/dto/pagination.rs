//! Filtering and pagination query parameters.

use std::num::NonZeroU32;

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::repositories::SongFilter;
use crate::error::AppError;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_VERSES_PER_PAGE: u32 = 5;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Checks that a paging value lies in `1..=max` (or is at least 1 when no
/// maximum applies).
fn positive(name: &str, value: u32, max: Option<u32>) -> Result<NonZeroU32, AppError> {
    let Some(value) = NonZeroU32::new(value) else {
        return Err(AppError::bad_request(
            format!("{name} must be greater than 0"),
            json!({ "param": name, "value": value }),
        ));
    };

    if let Some(max) = max
        && value.get() > max
    {
        return Err(AppError::bad_request(
            format!("{name} must be between 1 and {max}"),
            json!({ "param": name, "value": value.get() }),
        ));
    }

    Ok(value)
}

/// Query parameters for `GET /api/v1/songs`.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongListParams {
    #[serde(default)]
    pub group: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub release_date: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl SongListParams {
    /// Validates paging and converts the parameters into a [`SongFilter`].
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `pageSize`: 10
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 100
    pub fn into_filter(self) -> Result<SongFilter, AppError> {
        let page = positive("page", self.page.unwrap_or(1), None)?;
        let page_size = positive(
            "pageSize",
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            Some(MAX_PAGE_SIZE),
        )?;

        Ok(SongFilter::new(page, page_size)
            .with_group(self.group)
            .with_title(self.title)
            .with_release_date(self.release_date))
    }
}

/// Query parameters for `GET /api/v1/songs/{id}/lyrics`.
///
/// `verse` is the page number, counted in pages of `versesPerPage` verses.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub verse: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub verses_per_page: Option<u32>,
}

impl LyricsParams {
    /// Returns `(page, verses_per_page)`.
    ///
    /// # Defaults
    ///
    /// - `verse`: 1
    /// - `versesPerPage`: 5 (max 100)
    pub fn page_and_size(&self) -> Result<(NonZeroU32, NonZeroU32), AppError> {
        let page = positive("verse", self.verse.unwrap_or(1), None)?;
        let per_page = positive(
            "versesPerPage",
            self.verses_per_page.unwrap_or(DEFAULT_VERSES_PER_PAGE),
            Some(MAX_PAGE_SIZE),
        )?;

        Ok((page, per_page))
    }
}
