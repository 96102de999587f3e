#![allow(dead_code)]

use playdeck::{
    config::Config,
    event::events::Event,
    ui::{app::App, context::AppContext, layout::AppLayout},
};
use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn context(config: Config) -> (AppContext, flume::Receiver<Event>) {
    let (tx, rx) = flume::unbounded();
    (AppContext::new(config, tx), rx)
}

pub fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            AppLayout::new(app).render(f, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}
