//! Song entity and its creation inputs.

/// A song stored in the catalog.
///
/// `text` holds the full lyrics, verses separated by a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: i64,
    pub group: String,
    pub title: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl Song {
    /// Creates a new Song instance.
    pub fn new(
        id: i64,
        group: String,
        title: String,
        release_date: String,
        text: String,
        link: String,
    ) -> Self {
        Self {
            id,
            group,
            title,
            release_date,
            text,
            link,
        }
    }
}

/// Metadata returned by the enrichment lookup for a group/title pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDetail {
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Input data for creating a new song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub group: String,
    pub title: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl NewSong {
    /// Combines the caller-supplied identity with enrichment metadata.
    pub fn from_detail(group: String, title: String, detail: SongDetail) -> Self {
        Self {
            group,
            title,
            release_date: detail.release_date,
            text: detail.text,
            link: detail.link,
        }
    }
}
