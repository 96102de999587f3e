use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
};

use crate::{
    ui::{
        app::App,
        components::{header::NavHeader, hints::KeyHints},
        route::Route,
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let route = self.app.router.active_route().unwrap_or(Route::Playlist);
        let hints = self
            .app
            .router
            .active_view()
            .map(|v| v.key_hints())
            .unwrap_or(&[]);

        f.render_widget(
            NavHeader::new(route.title(), self.app.router.can_go_back()),
            chunks[0],
        );
        self.app.router.render(f, chunks[1], &self.app.ctx);
        f.render_widget(KeyHints::new(hints), chunks[2]);
    }
}
