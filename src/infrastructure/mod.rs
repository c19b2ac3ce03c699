//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`enrichment`] - HTTP client for the song metadata service

pub mod enrichment;
pub mod persistence;
