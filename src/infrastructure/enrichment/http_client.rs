//! HTTP client for the external song metadata service.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::enrichment::EnrichmentClient;
use crate::domain::entities::SongDetail;
use crate::error::EnrichmentError;

/// Wire format of `GET /info`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InfoResponse {
    release_date: String,
    text: String,
    link: String,
}

impl From<InfoResponse> for SongDetail {
    fn from(r: InfoResponse) -> Self {
        SongDetail {
            release_date: r.release_date,
            text: r.text,
            link: r.link,
        }
    }
}

/// Enrichment client backed by `GET {base_url}/info?group=..&song=..`.
///
/// Uses the transport's default timeouts and makes exactly one attempt per
/// lookup.
#[derive(Debug, Clone)]
pub struct HttpEnrichmentClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEnrichmentClient {
    /// Creates a client for the given service base URL.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest` connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl EnrichmentClient for HttpEnrichmentClient {
    async fn fetch_details(
        &self,
        group: &str,
        title: &str,
    ) -> Result<SongDetail, EnrichmentError> {
        let url = format!("{}/info", self.base_url);
        tracing::debug!(%url, group, title, "Requesting song details");

        let response = self
            .client
            .get(&url)
            .query(&[("group", group), ("song", title)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, group, title, "Metadata service request failed");
                EnrichmentError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, group, title, "Metadata service returned an error status");
            return Err(EnrichmentError::Status(status));
        }

        let info: InfoResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, group, title, "Failed to decode metadata response");
            EnrichmentError::Decode(e)
        })?;

        tracing::info!(group, title, "Retrieved song details");

        Ok(info.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpEnrichmentClient::new("http://localhost:9000/");
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_info_response_uses_camel_case() {
        let body = r#"{"releaseDate":"16.07.2006","text":"Ooh baby","link":"https://example.com"}"#;
        let info: InfoResponse = serde_json::from_str(body).unwrap();
        let detail = SongDetail::from(info);

        assert_eq!(detail.release_date, "16.07.2006");
        assert_eq!(detail.text, "Ooh baby");
        assert_eq!(detail.link, "https://example.com");
    }

    #[test]
    fn test_info_response_missing_field_is_error() {
        let body = r#"{"releaseDate":"16.07.2006","text":"Ooh baby"}"#;
        assert!(serde_json::from_str::<InfoResponse>(body).is_err());
    }
}
