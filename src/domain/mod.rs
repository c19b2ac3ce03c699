//! Domain layer containing the catalog's entities and contracts.
//!
//! - [`entities`] - Song, its creation input, enrichment detail and lyrics view
//! - [`repositories`] - Storage trait definitions
//! - [`enrichment`] - External metadata lookup trait
//!
//! The domain layer has no dependency on the HTTP or database layers; the
//! traits here are implemented in [`crate::infrastructure`] and consumed by
//! [`crate::application::services`].

pub mod enrichment;
pub mod entities;
pub mod repositories;
