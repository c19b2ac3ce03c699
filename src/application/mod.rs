//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide the API used by HTTP
//! handlers and the admin CLI.
//!
//! - [`services::song_service::SongService`] - Catalog operations and lyric pagination

pub mod services;
