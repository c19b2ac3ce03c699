//! Song catalog service.

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::domain::enrichment::EnrichmentClient;
use crate::domain::entities::{Lyrics, NewSong, Song};
use crate::domain::repositories::{SongFilter, SongRepository};
use crate::error::AppError;

/// Service orchestrating song storage and metadata enrichment.
///
/// Storage errors and enrichment errors are passed through unchanged.
pub struct SongService<R: SongRepository, E: EnrichmentClient> {
    song_repository: Arc<R>,
    enrichment: Arc<E>,
}

impl<R: SongRepository, E: EnrichmentClient> SongService<R, E> {
    /// Creates a new song service.
    pub fn new(song_repository: Arc<R>, enrichment: Arc<E>) -> Self {
        Self {
            song_repository,
            enrichment,
        }
    }

    /// Lists one page of songs matching `filter`.
    pub async fn get_songs(&self, filter: SongFilter) -> Result<Vec<Song>, AppError> {
        tracing::debug!(?filter, "Listing songs");
        self.song_repository.find(filter).await
    }

    /// Adds a song, taking release date, text and link from the metadata
    /// service.
    ///
    /// Nothing is stored unless the lookup succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Enrichment`] if the lookup fails and
    /// [`AppError::Storage`] if the insert fails.
    pub async fn add_song(&self, group: String, title: String) -> Result<Song, AppError> {
        let detail = self.enrichment.fetch_details(&group, &title).await?;

        let new_song = NewSong::from_detail(group, title, detail);
        self.song_repository.create(new_song).await
    }

    /// Deletes a song. Deleting an unknown id is not an error.
    pub async fn delete_song(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.song_repository.delete(id).await?;

        if !deleted {
            tracing::debug!(song_id = id, "Delete requested for unknown song");
        }

        Ok(())
    }

    /// Replaces every field of an existing song.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the song does not exist.
    pub async fn update_song(&self, song: Song) -> Result<Song, AppError> {
        self.song_repository.update(song).await
    }

    /// Retrieves a song by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the song does not exist.
    pub async fn get_song_by_id(&self, id: i64) -> Result<Song, AppError> {
        self.song_repository.find_by_id(id).await
    }

    /// Returns page `page` of the song's verses, `verses_per_page` at a time.
    ///
    /// A page past the end yields an empty verse list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the song does not exist.
    pub async fn get_song_lyrics(
        &self,
        id: i64,
        page: NonZeroU32,
        verses_per_page: NonZeroU32,
    ) -> Result<Lyrics, AppError> {
        let song = self.song_repository.find_by_id(id).await?;
        Ok(Lyrics::paginate(&song, page, verses_per_page))
    }

    /// Counts all songs in the catalog.
    pub async fn count_songs(&self) -> Result<i64, AppError> {
        self.song_repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrichment::MockEnrichmentClient;
    use crate::domain::entities::SongDetail;
    use crate::domain::repositories::MockSongRepository;
    use crate::error::EnrichmentError;
    use serde_json::json;

    fn nz(v: u32) -> NonZeroU32 {
        NonZeroU32::new(v).unwrap()
    }

    fn create_test_song(id: i64, text: &str) -> Song {
        Song::new(
            id,
            "Muse".to_string(),
            "Supermassive Black Hole".to_string(),
            "2006-07-16".to_string(),
            text.to_string(),
            "https://example.com/smbh".to_string(),
        )
    }

    fn service(
        repo: MockSongRepository,
        enrichment: MockEnrichmentClient,
    ) -> SongService<MockSongRepository, MockEnrichmentClient> {
        SongService::new(Arc::new(repo), Arc::new(enrichment))
    }

    #[tokio::test]
    async fn test_add_song_uses_enrichment_metadata() {
        let mut mock_repo = MockSongRepository::new();
        let mut mock_enrichment = MockEnrichmentClient::new();

        mock_enrichment
            .expect_fetch_details()
            .withf(|group, title| group == "Muse" && title == "Supermassive Black Hole")
            .times(1)
            .returning(|_, _| {
                Ok(SongDetail {
                    release_date: "2006-07-16".to_string(),
                    text: "Ooh baby, don't you know I suffer?".to_string(),
                    link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_string(),
                })
            });

        mock_repo
            .expect_create()
            .withf(|new_song| {
                new_song.group == "Muse"
                    && new_song.title == "Supermassive Black Hole"
                    && new_song.release_date == "2006-07-16"
                    && new_song.text == "Ooh baby, don't you know I suffer?"
                    && new_song.link == "https://www.youtube.com/watch?v=Xsp3_a-PMTw"
            })
            .times(1)
            .returning(|new_song| {
                Ok(Song::new(
                    1,
                    new_song.group,
                    new_song.title,
                    new_song.release_date,
                    new_song.text,
                    new_song.link,
                ))
            });

        let service = service(mock_repo, mock_enrichment);

        let song = service
            .add_song("Muse".to_string(), "Supermassive Black Hole".to_string())
            .await
            .unwrap();

        assert_eq!(song.id, 1);
        assert_eq!(song.release_date, "2006-07-16");
        assert_eq!(song.link, "https://www.youtube.com/watch?v=Xsp3_a-PMTw");
    }

    #[tokio::test]
    async fn test_add_song_enrichment_failure_stores_nothing() {
        let mut mock_repo = MockSongRepository::new();
        let mut mock_enrichment = MockEnrichmentClient::new();

        mock_enrichment
            .expect_fetch_details()
            .times(1)
            .returning(|_, _| Err(EnrichmentError::Status(reqwest::StatusCode::BAD_GATEWAY)));

        mock_repo.expect_create().times(0);

        let service = service(mock_repo, mock_enrichment);

        let result = service
            .add_song("Muse".to_string(), "Supermassive Black Hole".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Enrichment(EnrichmentError::Status(_))
        ));
    }

    #[tokio::test]
    async fn test_add_song_storage_failure_is_propagated() {
        let mut mock_repo = MockSongRepository::new();
        let mut mock_enrichment = MockEnrichmentClient::new();

        mock_enrichment
            .expect_fetch_details()
            .times(1)
            .returning(|_, _| Ok(SongDetail::default()));

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::Storage(sqlx::Error::PoolTimedOut)));

        let service = service(mock_repo, mock_enrichment);

        let result = service
            .add_song("Muse".to_string(), "Uprising".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_get_songs_passes_filter_through() {
        let mut mock_repo = MockSongRepository::new();

        mock_repo
            .expect_find()
            .withf(|filter| {
                filter.group.as_deref() == Some("mus") && filter.page.get() == 2 && filter.limit() == 5
            })
            .times(1)
            .returning(|_| Ok(vec![create_test_song(6, "")]));

        let service = service(mock_repo, MockEnrichmentClient::new());

        let filter = SongFilter::new(nz(2), nz(5)).with_group(Some("mus".to_string()));
        let songs = service.get_songs(filter).await.unwrap();

        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, 6);
    }

    #[tokio::test]
    async fn test_delete_unknown_song_is_ok() {
        let mut mock_repo = MockSongRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 404)
            .times(1)
            .returning(|_| Ok(false));

        let service = service(mock_repo, MockEnrichmentClient::new());

        assert!(service.delete_song(404).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_song_is_not_found() {
        let mut mock_repo = MockSongRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|song| Err(AppError::not_found("Song not found", json!({ "id": song.id }))));

        let service = service(mock_repo, MockEnrichmentClient::new());

        let result = service.update_song(create_test_song(99, "")).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_song_lyrics_paginates() {
        let mut mock_repo = MockSongRepository::new();

        let text = (1..=12)
            .map(|i| format!("verse {i}"))
            .collect::<Vec<_>>()
            .join("\n\n");
        let song = create_test_song(3, &text);

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(move |_| Ok(song.clone()));

        let service = service(mock_repo, MockEnrichmentClient::new());

        let lyrics = service.get_song_lyrics(3, nz(3), nz(5)).await.unwrap();

        assert_eq!(lyrics.song_id, 3);
        assert_eq!(lyrics.total_pages, 3);
        assert_eq!(lyrics.verses, vec!["verse 11", "verse 12"]);
    }

    #[tokio::test]
    async fn test_get_song_lyrics_not_found() {
        let mut mock_repo = MockSongRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Err(AppError::not_found("Song not found", json!({ "id": id }))));

        let service = service(mock_repo, MockEnrichmentClient::new());

        let result = service.get_song_lyrics(1, nz(1), nz(5)).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
