//! DTOs for song endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Song;

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// JSON representation of a song.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SongResponse {
    pub id: i64,
    pub group: String,
    pub title: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl From<Song> for SongResponse {
    fn from(s: Song) -> Self {
        Self {
            id: s.id,
            group: s.group,
            title: s.title,
            release_date: s.release_date,
            text: s.text,
            link: s.link,
        }
    }
}

/// Request body for `POST /api/v1/songs`.
///
/// Only the group and song title are accepted; everything else comes from
/// the metadata service.
#[derive(Debug, Deserialize, Validate)]
pub struct AddSongRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub group: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub song: String,
}

/// Request body for `PUT /api/v1/songs/{id}`.
///
/// Replaces the whole song. An `id` in the body is ignored; the path id wins.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSongRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub group: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[serde(default)]
    pub release_date: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub link: String,
}

impl UpdateSongRequest {
    pub fn into_song(self, id: i64) -> Song {
        Song::new(
            id,
            self.group,
            self.title,
            self.release_date,
            self.text,
            self.link,
        )
    }
}
