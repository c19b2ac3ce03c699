//! API route configuration.

use crate::api::handlers::{
    add_song_handler, delete_song_handler, get_song_handler, list_songs_handler,
    song_lyrics_handler, update_song_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Song catalog routes, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `GET    /songs`             - List songs (filtered, paginated)
/// - `POST   /songs`             - Add a song via the metadata service
/// - `GET    /songs/{id}`        - Fetch a song
/// - `PUT    /songs/{id}`        - Replace a song
/// - `DELETE /songs/{id}`        - Delete a song
/// - `GET    /songs/{id}/lyrics` - Verse-paginated lyrics
pub fn song_routes() -> Router<AppState> {
    Router::new()
        .route("/songs", get(list_songs_handler).post(add_song_handler))
        .route(
            "/songs/{id}",
            get(get_song_handler)
                .put(update_song_handler)
                .delete(delete_song_handler),
        )
        .route("/songs/{id}/lyrics", get(song_lyrics_handler))
}
