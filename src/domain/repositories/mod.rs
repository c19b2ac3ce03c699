//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; the PostgreSQL implementation
//! lives in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for service tests.

pub mod song_repository;

pub use song_repository::{SongFilter, SongRepository};

#[cfg(test)]
pub use song_repository::MockSongRepository;
