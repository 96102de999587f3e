use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        traits::Action,
        tui::{TerminalEvent, Tui},
        views::build_view,
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => debug!("terminal_ready"),
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Resize(..) => {}
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
        }

        Ok(true)
    }

    /// Application events go to every mounted view.
    pub async fn handle_action(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;
    }

    pub async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            Self::dispatch_action(app, Action::Quit).await;
            return;
        }

        if let Some(action) = app.router.handle_input(evt, &app.ctx).await {
            Self::dispatch_action(app, action).await;
            return;
        }

        if let Some(action) = InputHandler::handle_key(evt) {
            Self::dispatch_action(app, action).await;
        }
    }

    pub async fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => {
                info!("quit_requested");
                app.should_quit = true;
            }
            Action::Navigate(route) => {
                let mut view = build_view(route, &app.ctx);
                view.on_mount(&app.ctx).await;
                app.router.push(view);
            }
            Action::Back => {
                // Dropping the view tears down anything it still runs.
                drop(app.router.pop());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        ui::route::{PlayerParams, Route},
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn enter_pushes_player_and_escape_pops() {
        let mut app = App::new(Config::default());

        EventHandler::handle_key_event(&mut app, key(KeyCode::Enter)).await;
        assert_eq!(app.router.depth(), 2);
        let expected = PlayerParams::from(app.ctx.catalog.first().unwrap());
        assert_eq!(app.router.active_route(), Some(Route::Player(expected)));

        EventHandler::handle_key_event(&mut app, key(KeyCode::Esc)).await;
        assert_eq!(app.router.routes(), vec![Route::Playlist]);

        EventHandler::handle_key_event(&mut app, key(KeyCode::Esc)).await;
        assert_eq!(app.router.depth(), 1);
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn skip_stacks_another_player() {
        let mut app = App::new(Config::default());

        EventHandler::handle_key_event(&mut app, key(KeyCode::Enter)).await;
        EventHandler::handle_key_event(&mut app, key(KeyCode::Char('n'))).await;

        let routes = app.router.routes();
        assert_eq!(routes.len(), 3);
        assert_eq!(routes[1], routes[2]);
    }

    #[tokio::test]
    async fn quit_keys() {
        let mut app = App::new(Config::default());
        EventHandler::handle_key_event(&mut app, key(KeyCode::Char('q'))).await;
        assert!(app.should_quit);

        let mut app = App::new(Config::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        EventHandler::handle_key_event(&mut app, ctrl_c).await;
        assert!(app.should_quit);
    }
}
