//! HTTP request handlers for API endpoints.

pub mod health;
pub mod lyrics;
pub mod songs;

pub use health::health_handler;
pub use lyrics::song_lyrics_handler;
pub use songs::{
    add_song_handler, delete_song_handler, get_song_handler, list_songs_handler,
    update_song_handler,
};
