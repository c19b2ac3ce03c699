//! Handlers for song catalog endpoints (list, create, fetch, update, delete).

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::SongListParams;
use crate::api::dto::song::{AddSongRequest, SongResponse, UpdateSongRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::song_id::parse_song_id;

/// Lists songs with filtering and pagination.
///
/// # Endpoint
///
/// `GET /api/v1/songs`
///
/// # Query Parameters
///
/// - `group` (optional): Case-insensitive substring of the group name
/// - `title` (optional): Case-insensitive substring of the song title
/// - `releaseDate` (optional): Exact release date
/// - `page` (optional): Page number (default: 1)
/// - `pageSize` (optional): Songs per page (default: 10, max: 100)
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn list_songs_handler(
    State(state): State<AppState>,
    params: Result<Query<SongListParams>, QueryRejection>,
) -> Result<Json<Vec<SongResponse>>, AppError> {
    let Query(params) = params?;
    let filter = params.into_filter()?;

    let songs = state.song_service.get_songs(filter).await?;

    Ok(Json(songs.into_iter().map(SongResponse::from).collect()))
}

/// Adds a song, enriched with release date, lyrics and link from the
/// metadata service.
///
/// # Endpoint
///
/// `POST /api/v1/songs`
///
/// # Request Body
///
/// ```json
/// { "group": "Muse", "song": "Supermassive Black Hole" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or a field is blank.
/// Returns 500 if the metadata lookup or the insert fails; no song is stored.
pub async fn add_song_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddSongRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SongResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let song = state
        .song_service
        .add_song(payload.group, payload.song)
        .await?;

    tracing::info!(song_id = song.id, group = %song.group, title = %song.title, "Song added");

    Ok((StatusCode::CREATED, Json(song.into())))
}

/// Fetches a single song.
///
/// # Endpoint
///
/// `GET /api/v1/songs/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not an unsigned integer.
/// Returns 404 Not Found if the song doesn't exist.
pub async fn get_song_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SongResponse>, AppError> {
    let id = parse_song_id(&id)?;

    let song = state.song_service.get_song_by_id(id).await?;

    Ok(Json(song.into()))
}

/// Replaces a song's data.
///
/// # Endpoint
///
/// `PUT /api/v1/songs/{id}`
///
/// # Request Body
///
/// ```json
/// {
///   "group": "Muse",
///   "title": "Supermassive Black Hole",
///   "releaseDate": "16.07.2006",
///   "text": "Ooh baby, don't you know I suffer?\n\n...",
///   "link": "https://www.youtube.com/watch?v=Xsp3_a-PMTw"
/// }
/// ```
///
/// Omitted `releaseDate`, `text` and `link` are stored as empty strings.
///
/// # Errors
///
/// Returns 400 Bad Request if the id or body is invalid.
/// Returns 404 Not Found if the song doesn't exist.
pub async fn update_song_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateSongRequest>, JsonRejection>,
) -> Result<Json<SongResponse>, AppError> {
    let id = parse_song_id(&id)?;
    let Json(payload) = payload?;
    payload.validate()?;

    let song = state.song_service.update_song(payload.into_song(id)).await?;

    Ok(Json(song.into()))
}

/// Deletes a song.
///
/// # Endpoint
///
/// `DELETE /api/v1/songs/{id}`
///
/// Deleting an id that doesn't exist also returns 204.
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not an unsigned integer.
pub async fn delete_song_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_song_id(&id)?;

    state.song_service.delete_song(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
