use crate::library::{Song, SongId};

pub const PLAYLIST_TITLE: &str = "My Playlist";
pub const PLAYER_FALLBACK_TITLE: &str = "Now Playing";

/// Snapshot of a song handed to the player route. Later changes to the
/// catalog entry it was copied from do not reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerParams {
    pub song_id: SongId,
    pub song_title: String,
    pub song_artist: String,
    pub album_cover_url: String,
}

impl From<&Song> for PlayerParams {
    fn from(song: &Song) -> Self {
        Self {
            song_id: song.id.clone(),
            song_title: song.title.clone(),
            song_artist: song.artist.clone(),
            album_cover_url: song.album_cover_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Playlist,
    Player(PlayerParams),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Playlist => "Playlist",
            Route::Player(_) => "Player",
        }
    }

    /// Header bar text for this route.
    pub fn title(&self) -> &str {
        match self {
            Route::Playlist => PLAYLIST_TITLE,
            Route::Player(params) if params.song_title.trim().is_empty() => PLAYER_FALLBACK_TITLE,
            Route::Player(params) => &params.song_title,
        }
    }
}
