//! Business logic services for the application layer.

pub mod song_service;

pub use song_service::SongService;
