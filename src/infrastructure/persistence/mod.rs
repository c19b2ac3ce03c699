//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters throughout.

pub mod pg_song_repository;

pub use pg_song_repository::PgSongRepository;
