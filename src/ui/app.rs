use flume::Receiver;

use crate::{
    config::Config,
    event::events::Event,
    ui::{
        context::AppContext,
        layout::AppLayout,
        route::Route,
        router::Router,
        views::build_view,
    },
};

use super::{tui, util::handler::EventHandler};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub router: Router,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let ctx = AppContext::new(config, event_tx);
        Self::with_context(ctx, event_rx)
    }

    pub fn with_context(ctx: AppContext, event_rx: Receiver<Event>) -> Self {
        let router = Router::new(build_view(Route::Playlist, &ctx));
        Self {
            event_rx,
            ctx,
            router,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new(self.ctx.config.ui.render_tick())?;
        tui.enter()?;

        if let Some(root) = self.router.active_view_mut() {
            root.on_mount(&self.ctx).await;
        }

        while !self.should_quit {
            if self.has_focus {
                tui.draw(|f| {
                    let area = f.area();
                    AppLayout::new(self).render(f, area);
                })?;
            }

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }
}
