use std::collections::HashSet;

use lazy_static::lazy_static;
use tracing::{info, warn};

use crate::{
    config::CatalogConfig,
    library::{LibraryError, Song, SongId},
};

pub const DEFAULT_LABEL: &str = "Pedro Infante";
pub const DEFAULT_HEADER_COVER_URL: &str = "https://placehold.co/400x200/png";
const DEFAULT_SONG_COVER_URL: &str = "https://placehold.co/120x120/png";

lazy_static! {
    static ref SEED_SONGS: Vec<Song> = vec![
        Song::new("1", "Cien Años", "Pedro Infante", DEFAULT_SONG_COVER_URL, false),
        Song::new("2", "Fallaste Corazón", "Pedro Infante", DEFAULT_SONG_COVER_URL, true),
        Song::new("3", "Amorcito Corazón", "Pedro Infante", DEFAULT_SONG_COVER_URL, true),
        Song::new("4", "Cielito Lindo", "Pedro Infante", DEFAULT_SONG_COVER_URL, true),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    Next,
    Previous,
}

/// The ordered, read-only song list the playlist view is seeded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    label: String,
    header_cover_url: String,
    songs: Vec<Song>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl Catalog {
    pub fn seed() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            header_cover_url: DEFAULT_HEADER_COVER_URL.to_string(),
            songs: SEED_SONGS.clone(),
        }
    }

    /// Builds a catalog, rejecting empty or repeated ids.
    pub fn new(
        label: impl Into<String>,
        header_cover_url: impl Into<String>,
        songs: Vec<Song>,
    ) -> Result<Self, LibraryError> {
        let mut seen = HashSet::with_capacity(songs.len());
        for song in &songs {
            if song.id.as_str().is_empty() {
                return Err(LibraryError::EmptySongId);
            }
            if !seen.insert(&song.id) {
                return Err(LibraryError::DuplicateSongId(song.id.to_string()));
            }
        }

        Ok(Self {
            label: label.into(),
            header_cover_url: header_cover_url.into(),
            songs,
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        let label = config.label.as_deref().unwrap_or(DEFAULT_LABEL);
        let header_cover_url = config
            .header_cover_url
            .as_deref()
            .unwrap_or(DEFAULT_HEADER_COVER_URL);

        let Some(songs) = &config.songs else {
            return Self {
                label: label.to_string(),
                header_cover_url: header_cover_url.to_string(),
                songs: SEED_SONGS.clone(),
            };
        };

        match Self::new(label, header_cover_url, songs.clone()) {
            Ok(catalog) => {
                info!(songs = catalog.len(), "catalog_loaded_from_config");
                catalog
            }
            Err(e) => {
                warn!(error = %e, "catalog_config_rejected, using built-in songs");
                Self::seed()
            }
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn header_cover_url(&self) -> &str {
        &self.header_cover_url
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn first(&self) -> Result<&Song, LibraryError> {
        self.songs.first().ok_or(LibraryError::EmptyCatalog)
    }

    pub fn get(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|s| &s.id == id)
    }

    pub fn position(&self, id: &SongId) -> Option<usize> {
        self.songs.iter().position(|s| &s.id == id)
    }

    /// The neighbour of `id` in catalog order, wrapping at both ends.
    pub fn adjacent(&self, id: &SongId, direction: SkipDirection) -> Result<&Song, LibraryError> {
        if self.songs.is_empty() {
            return Err(LibraryError::EmptyCatalog);
        }

        let index = self
            .position(id)
            .ok_or_else(|| LibraryError::SongNotFound(id.to_string()))?;
        let len = self.songs.len();
        let target = match direction {
            SkipDirection::Next => (index + 1) % len,
            SkipDirection::Previous => (index + len - 1) % len,
        };

        Ok(&self.songs[target])
    }

    pub fn initially_liked(&self) -> impl Iterator<Item = &SongId> {
        self.songs.iter().filter(|s| s.liked).map(|s| &s.id)
    }
}
