use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SongId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SongId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single catalog entry.
///
/// `liked` is the initial like flag. A playlist without a shared like store
/// flips its own copy; with one, the store decides. Nothing writes it back
/// to disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub album_cover_url: String,
    #[serde(default)]
    pub liked: bool,
}

impl Song {
    pub fn new(
        id: impl Into<SongId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        album_cover_url: impl Into<String>,
        liked: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album_cover_url: album_cover_url.into(),
            liked,
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            liked: !self.liked,
            ..self.clone()
        }
    }
}
