//! Verse-paginated view over a song's lyrics.

use std::num::NonZeroU32;

use super::Song;

/// Separator between two verses: a blank line.
pub const VERSE_DELIMITER: &str = "\n\n";

/// Splits lyrics into verses.
///
/// Every segment between delimiters is a verse, including an empty first or
/// last segment. Empty text yields a single empty verse. Joining the result
/// with [`VERSE_DELIMITER`] reproduces the input exactly.
pub fn split_verses(text: &str) -> Vec<&str> {
    text.split(VERSE_DELIMITER).collect()
}

/// One page of a song's verses plus paging metadata.
///
/// Derived on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lyrics {
    pub song_id: i64,
    pub title: String,
    pub group: String,
    pub verses: Vec<String>,
    pub current_page: u32,
    pub total_pages: u32,
    pub verses_per_page: u32,
}

impl Lyrics {
    /// Cuts page `page` (1-indexed) out of the song's verses.
    ///
    /// A page past the last one yields an empty verse list.
    pub fn paginate(song: &Song, page: NonZeroU32, verses_per_page: NonZeroU32) -> Self {
        let verses = split_verses(&song.text);
        let count = verses.len();
        let per_page = verses_per_page.get() as usize;

        let total_pages = u32::try_from(count.div_ceil(per_page)).unwrap_or(u32::MAX);

        let start = (page.get() as usize - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page).min(count);

        let window = if start >= count {
            Vec::new()
        } else {
            verses[start..end].iter().map(|v| v.to_string()).collect()
        };

        Self {
            song_id: song.id,
            title: song.title.clone(),
            group: song.group.clone(),
            verses: window,
            current_page: page.get(),
            total_pages,
            verses_per_page: verses_per_page.get(),
        }
    }
}
