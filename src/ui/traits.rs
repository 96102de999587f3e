use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    event::events::Event,
    ui::{context::AppContext, route::Route},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Navigate(Route),
    Back,
}

#[async_trait]
pub trait View: Send {
    /// The route this view was mounted for, including its params.
    fn route(&self) -> Route;

    async fn on_mount(&mut self, _ctx: &AppContext) {}

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext);

    async fn handle_input(&mut self, key: KeyEvent, ctx: &AppContext) -> Option<Action>;

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}
