mod common;

use axum::http::StatusCode;
use song_catalog::domain::enrichment::EnrichmentClient;
use song_catalog::error::EnrichmentError;
use song_catalog::infrastructure::enrichment::HttpEnrichmentClient;

#[tokio::test]
async fn test_fetch_details_success() {
    let stub = common::spawn_smbh_stub().await;
    let client = HttpEnrichmentClient::new(stub.base_url.clone());

    let detail = client
        .fetch_details("Muse", "Supermassive Black Hole")
        .await
        .unwrap();

    assert_eq!(detail.release_date, "16.07.2006");
    assert_eq!(detail.text, common::SMBH_TEXT);
    assert_eq!(detail.link, "https://www.youtube.com/watch?v=Xsp3_a-PMTw");
}

#[tokio::test]
async fn test_fetch_details_sends_group_and_song() {
    let stub = common::spawn_smbh_stub().await;
    let client = HttpEnrichmentClient::new(format!("{}/", stub.base_url));

    client
        .fetch_details("Simon & Garfunkel", "The Sound of Silence?")
        .await
        .unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["group"], "Simon & Garfunkel");
    assert_eq!(requests[0]["song"], "The Sound of Silence?");
}

#[tokio::test]
async fn test_fetch_details_non_success_status() {
    let stub = common::spawn_metadata_stub(StatusCode::NOT_FOUND, "{}").await;
    let client = HttpEnrichmentClient::new(stub.base_url.clone());

    let err = client.fetch_details("Muse", "Unknown").await.unwrap_err();

    assert!(matches!(err, EnrichmentError::Status(StatusCode::NOT_FOUND)));
}

#[tokio::test]
async fn test_fetch_details_undecodable_body() {
    let stub = common::spawn_metadata_stub(StatusCode::OK, r#"{"releaseDate": 2006}"#).await;
    let client = HttpEnrichmentClient::new(stub.base_url.clone());

    let err = client.fetch_details("Muse", "Uprising").await.unwrap_err();

    assert!(matches!(err, EnrichmentError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_details_transport_failure() {
    let client = HttpEnrichmentClient::new(common::UNREACHABLE_URL);

    let err = client.fetch_details("Muse", "Uprising").await.unwrap_err();

    assert!(matches!(err, EnrichmentError::Transport(_)));
}
