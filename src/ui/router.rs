use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tracing::info;

use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::route::Route;
use crate::ui::traits::{Action, View};

/// Last-in-first-out stack of mounted views. The root is never popped.
pub struct Router {
    pub stack: Vec<Box<dyn View>>,
}

impl Router {
    pub fn new(initial_view: Box<dyn View>) -> Self {
        Self {
            stack: vec![initial_view],
        }
    }

    pub fn push(&mut self, view: Box<dyn View>) {
        info!(
            route = view.route().name(),
            depth = self.stack.len() + 1,
            "router_push"
        );
        self.stack.push(view);
    }

    /// Unmounts the top view. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<Box<dyn View>> {
        if self.stack.len() > 1 {
            let view = self.stack.pop();
            info!(depth = self.stack.len(), "router_pop");
            view
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn active_view(&self) -> Option<&dyn View> {
        self.stack.last().map(|v| v.as_ref())
    }

    pub fn active_view_mut(&mut self) -> Option<&mut Box<dyn View>> {
        self.stack.last_mut()
    }

    pub fn active_route(&self) -> Option<Route> {
        self.active_view().map(|v| v.route())
    }

    pub fn routes(&self) -> Vec<Route> {
        self.stack.iter().map(|v| v.route()).collect()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        if let Some(view) = self.stack.last_mut() {
            view.render(f, area, ctx);
        }
    }

    pub async fn handle_input(&mut self, key: KeyEvent, ctx: &AppContext) -> Option<Action> {
        if let Some(view) = self.stack.last_mut() {
            view.handle_input(key, ctx).await
        } else {
            None
        }
    }

    /// Every mounted view sees every event, not only the visible one.
    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        for view in &mut self.stack {
            view.on_event(event, ctx).await;
        }
    }
}
