//! Helpers shared by the request layer.
//!
//! - [`song_id`] - Uniform parsing of `{id}` path segments

pub mod song_id;
