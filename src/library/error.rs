use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibraryError {
    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Song not found: {0}")]
    SongNotFound(String),

    #[error("Duplicate song id: {0}")]
    DuplicateSongId(String),

    #[error("Song id must not be empty")]
    EmptySongId,
}
