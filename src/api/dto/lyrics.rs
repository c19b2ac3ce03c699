//! DTO for the lyrics endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Lyrics;

/// One page of a song's verses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LyricsResponse {
    pub song_id: i64,
    pub title: String,
    pub group: String,
    pub verses: Vec<String>,
    pub current_page: u32,
    pub total_pages: u32,
    pub verses_per_page: u32,
}

impl From<Lyrics> for LyricsResponse {
    fn from(l: Lyrics) -> Self {
        Self {
            song_id: l.song_id,
            title: l.title,
            group: l.group,
            verses: l.verses,
            current_page: l.current_page,
            total_pages: l.total_pages,
            verses_per_page: l.verses_per_page,
        }
    }
}
