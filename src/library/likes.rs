use std::{collections::HashMap, sync::Arc};

use arc_swap::ArcSwap;

use crate::library::SongId;

pub trait LikeStore: Send + Sync {
    fn is_liked(&self, id: &SongId) -> bool;

    /// Flips the flag for `id` and returns the new value.
    fn toggle(&mut self, id: &SongId) -> bool;
}

/// Likes owned by a single view instance. Starts empty on every mount.
#[derive(Debug, Clone, Default)]
pub struct LikedMap {
    entries: HashMap<SongId, bool>,
}

impl LikedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &HashMap<SongId, bool> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LikeStore for LikedMap {
    fn is_liked(&self, id: &SongId) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    fn toggle(&mut self, id: &SongId) -> bool {
        let entry = self.entries.entry(id.clone()).or_insert(false);
        *entry = !*entry;
        *entry
    }
}

/// Process-wide set of liked song ids. Clones share the same set.
#[derive(Debug, Clone)]
pub struct SharedLikes {
    inner: Arc<ArcSwap<im::HashSet<SongId>>>,
}

impl Default for SharedLikes {
    fn default() -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(im::HashSet::new())),
        }
    }
}

impl SharedLikes {
    pub fn new<'a>(liked: impl IntoIterator<Item = &'a SongId>) -> Self {
        let set: im::HashSet<SongId> = liked.into_iter().cloned().collect();
        Self {
            inner: Arc::new(ArcSwap::from_pointee(set)),
        }
    }

    pub fn snapshot(&self) -> im::HashSet<SongId> {
        (**self.inner.load()).clone()
    }

    pub fn liked_ids(&self) -> Vec<SongId> {
        let mut ids: Vec<SongId> = self.snapshot().into_iter().collect();
        ids.sort();
        ids
    }
}

impl LikeStore for SharedLikes {
    fn is_liked(&self, id: &SongId) -> bool {
        self.inner.load().contains(id)
    }

    fn toggle(&mut self, id: &SongId) -> bool {
        let mut now_liked = false;
        self.inner.rcu(|set| {
            let mut next = (**set).clone();
            now_liked = next.remove(id).is_none();
            if now_liked {
                next.insert(id.clone());
            }
            next
        });
        now_liked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liked_map_starts_empty_and_flips() {
        let mut likes = LikedMap::new();
        let id = SongId::from("2");

        assert!(likes.is_empty());
        assert!(!likes.is_liked(&id));
        assert!(likes.toggle(&id));
        assert!(likes.is_liked(&id));
        assert!(!likes.toggle(&id));
        assert_eq!(likes.entries().get(&id), Some(&false));
    }

    #[test]
    fn shared_likes_are_visible_through_every_clone() {
        let seed = [SongId::from("2")];
        let mut playlist_side = SharedLikes::new(&seed);
        let player_side = playlist_side.clone();

        assert!(player_side.is_liked(&"2".into()));
        assert!(playlist_side.toggle(&"1".into()));
        assert!(player_side.is_liked(&"1".into()));

        assert!(!playlist_side.toggle(&"2".into()));
        assert_eq!(player_side.liked_ids(), vec![SongId::from("1")]);
    }
}
