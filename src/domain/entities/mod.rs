//! Core domain entities of the song catalog.
//!
//! - [`Song`] - A persisted catalog entry
//! - [`NewSong`] - Input for creating a song
//! - [`SongDetail`] - Metadata supplied by the enrichment lookup
//! - [`Lyrics`] - A verse-paginated, derived view over a song's text
//!
//! Entities are plain data structures with no persistence or transport
//! concerns.

pub mod lyrics;
pub mod song;

pub use lyrics::{Lyrics, VERSE_DELIMITER, split_verses};
pub use song::{NewSong, Song, SongDetail};
