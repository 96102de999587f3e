pub mod catalog;
pub mod error;
pub mod likes;
pub mod song;

pub use catalog::Catalog;
pub use error::LibraryError;
pub use likes::{LikeStore, LikedMap, SharedLikes};
pub use song::{Song, SongId};
