#![allow(dead_code)]

use axum::{
    Router,
    extract::Query,
    http::{StatusCode, header},
    routing::get,
};
use sqlx::PgPool;
use song_catalog::application::services::SongService;
use song_catalog::infrastructure::enrichment::HttpEnrichmentClient;
use song_catalog::infrastructure::persistence::PgSongRepository;
use song_catalog::state::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Base URL nothing listens on; requests to it fail at the transport level.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub const SMBH_TEXT: &str = "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?\n\nYou caught me under false pretenses\nHow long before you let me go?";

pub async fn insert_song(pool: &PgPool, group: &str, title: &str, release_date: &str, text: &str) -> i64 {
    sqlx::query_scalar(
        r#"INSERT INTO songs ("group", title, release_date, text, link) VALUES ($1, $2, $3, $4, '') RETURNING id"#,
    )
    .bind(group)
    .bind(title)
    .bind(release_date)
    .bind(text)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_songs(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Builds `count` verses joined by blank lines: "verse 1", "verse 2", ...
pub fn numbered_verses(count: usize) -> String {
    (1..=count)
        .map(|i| format!("verse {i}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// In-process stand-in for the metadata service's `GET /info`.
pub struct MetadataStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MetadataStub {
    /// Query parameters of every request received so far.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a stub answering every `/info` request with `status` and `body`.
pub async fn spawn_metadata_stub(status: StatusCode, body: &str) -> MetadataStub {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let body = body.to_string();

    let app = Router::new().route(
        "/info",
        get(move |Query(params): Query<HashMap<String, String>>| {
            recorded.lock().unwrap().push(params);
            let body = body.clone();
            async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MetadataStub {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// Stub returning a successful lookup for "Supermassive Black Hole".
pub async fn spawn_smbh_stub() -> MetadataStub {
    let body = serde_json::json!({
        "releaseDate": "16.07.2006",
        "text": SMBH_TEXT,
        "link": "https://www.youtube.com/watch?v=Xsp3_a-PMTw"
    });
    spawn_metadata_stub(StatusCode::OK, &body.to_string()).await
}

pub fn create_test_state(pool: PgPool, external_api_url: &str) -> AppState {
    let pool = Arc::new(pool);

    let song_repo = Arc::new(PgSongRepository::new(pool));
    let enrichment = Arc::new(HttpEnrichmentClient::new(external_api_url));
    let song_service = Arc::new(SongService::new(song_repo, enrichment));

    AppState::new(song_service)
}
