//! Handler for verse-paginated lyrics.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::api::dto::lyrics::LyricsResponse;
use crate::api::dto::pagination::LyricsParams;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::song_id::parse_song_id;

/// Returns one page of a song's verses.
///
/// # Endpoint
///
/// `GET /api/v1/songs/{id}/lyrics`
///
/// # Query Parameters
///
/// - `verse` (optional): Page number (default: 1)
/// - `versesPerPage` (optional): Verses per page (default: 5, max: 100)
///
/// A page past the last one returns an empty `verses` array.
///
/// # Response
///
/// ```json
/// {
///   "songId": 1,
///   "title": "Supermassive Black Hole",
///   "group": "Muse",
///   "verses": ["Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?"],
///   "currentPage": 1,
///   "totalPages": 3,
///   "versesPerPage": 5
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the id or paging parameters are invalid.
/// Returns 404 Not Found if the song doesn't exist.
pub async fn song_lyrics_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    params: Result<Query<LyricsParams>, QueryRejection>,
) -> Result<Json<LyricsResponse>, AppError> {
    let id = parse_song_id(&id)?;
    let Query(params) = params?;
    let (page, verses_per_page) = params.page_and_size()?;

    let lyrics = state
        .song_service
        .get_song_lyrics(id, page, verses_per_page)
        .await?;

    Ok(Json(lyrics.into()))
}
