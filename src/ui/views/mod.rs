pub mod player;
pub mod playlist;

pub use player::PlayerView;
pub use playlist::PlaylistView;

use crate::ui::{context::AppContext, route::Route, traits::View};

/// Mounts a fresh view for `route`. Nothing is reused between pushes.
pub fn build_view(route: Route, ctx: &AppContext) -> Box<dyn View> {
    match route {
        Route::Playlist => Box::new(PlaylistView::new(ctx)),
        Route::Player(params) => Box::new(PlayerView::new(params, ctx)),
    }
}
