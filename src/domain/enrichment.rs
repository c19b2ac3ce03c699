//! Contract for the external song metadata lookup.

use async_trait::async_trait;

use crate::domain::entities::SongDetail;
use crate::error::EnrichmentError;

/// Looks up release date, lyrics and link for a group/title pair.
///
/// # Implementations
///
/// - [`crate::infrastructure::enrichment::HttpEnrichmentClient`] - HTTP `GET /info` client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrichmentClient: Send + Sync {
    /// Performs a single lookup. No retries.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichmentError`] on transport failure, a non-success status
    /// or an undecodable body.
    async fn fetch_details(&self, group: &str, title: &str)
    -> Result<SongDetail, EnrichmentError>;
}
