use std::sync::Arc;

use flume::Sender;

use crate::{
    config::Config,
    event::events::Event,
    library::{Catalog, SharedLikes},
};

pub struct AppContext {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    /// Only consulted by the views when `likes.shared` is on.
    pub likes: SharedLikes,
    pub event_tx: Sender<Event>,
}

impl AppContext {
    pub fn new(config: Config, event_tx: Sender<Event>) -> Self {
        let catalog = Catalog::from_config(&config.catalog);
        Self::with_catalog(config, catalog, event_tx)
    }

    pub fn with_catalog(config: Config, catalog: Catalog, event_tx: Sender<Event>) -> Self {
        let likes = SharedLikes::new(catalog.initially_liked());
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            likes,
            event_tx,
        }
    }

    pub fn shared_likes(&self) -> Option<SharedLikes> {
        self.config.likes.shared.then(|| self.likes.clone())
    }
}
