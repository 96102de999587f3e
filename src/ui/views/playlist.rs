use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};
use tracing::{info, warn};

use crate::{
    library::{LikeStore, SharedLikes, Song, SongId},
    ui::{
        components::cover::CoverArt,
        context::AppContext,
        route::{PlayerParams, Route},
        traits::{Action, View},
    },
    util::{colors, text::truncate},
};

const HEADER_HEIGHT: u16 = 7;

/// The song list screen.
///
/// Holds its own copy of the catalog; `liked` flags flipped here live only
/// in that copy unless a shared like store was handed in, in which case the
/// store is the only record of likes.
pub struct PlaylistView {
    label: String,
    header_cover_url: String,
    songs: Vec<Song>,
    list_state: ListState,
    shared_likes: Option<SharedLikes>,
}

impl PlaylistView {
    pub fn new(ctx: &AppContext) -> Self {
        let catalog = &ctx.catalog;
        let mut list_state = ListState::default();
        if !catalog.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            label: catalog.label().to_string(),
            header_cover_url: catalog.header_cover_url().to_string(),
            songs: catalog.songs().to_vec(),
            list_state,
            shared_likes: ctx.shared_likes(),
        }
    }

    /// Rows as displayed, with `liked` read through [`Self::is_liked`].
    pub fn songs(&self) -> Vec<Song> {
        self.songs
            .iter()
            .map(|song| Song {
                liked: self.is_liked(&song.id),
                ..song.clone()
            })
            .collect()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, index: usize) {
        if index < self.songs.len() {
            self.list_state.select(Some(index));
        }
    }

    pub fn is_liked(&self, id: &SongId) -> bool {
        match &self.shared_likes {
            Some(likes) => likes.is_liked(id),
            None => self
                .songs
                .iter()
                .find(|s| &s.id == id)
                .is_some_and(|s| s.liked),
        }
    }

    /// Flips the like flag of one row. Returns the new value, or `None` if
    /// no row has that id.
    pub fn toggle_like(&mut self, id: &SongId) -> Option<bool> {
        let index = self.songs.iter().position(|s| &s.id == id)?;

        let liked = match &mut self.shared_likes {
            Some(likes) => likes.toggle(id),
            None => {
                self.songs[index] = self.songs[index].toggled();
                self.songs[index].liked
            }
        };

        info!(song_id = %id, liked, "playlist_toggle_like");
        Some(liked)
    }

    pub fn select_song(&self, song: &Song) -> Action {
        Action::Navigate(Route::Player(PlayerParams::from(song)))
    }

    /// Opens the player on the first song, whatever row is highlighted.
    pub fn play_all(&self) -> Option<Action> {
        match self.songs.first() {
            Some(song) => Some(self.select_song(song)),
            None => {
                warn!("play_all_on_empty_playlist");
                None
            }
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(16)])
            .split(area);

        f.render_widget(
            CoverArt::new(&self.header_cover_url).caption(&self.label),
            chunks[0],
        );

        let play_all = Paragraph::new(vec![
            Line::default(),
            Line::default(),
            Line::from(Span::styled(
                " ▶ Play all ",
                Style::default()
                    .fg(colors::BACKGROUND)
                    .bg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("   [p]", Style::default().fg(colors::NEUTRAL))),
        ]);
        f.render_widget(play_all, chunks[1]);
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        if self.songs.is_empty() {
            let empty = Paragraph::new("No songs").style(Style::default().fg(colors::NEUTRAL));
            f.render_widget(empty, area);
            return;
        }

        let text_width = (area.width as usize).saturating_sub(10);
        let items: Vec<ListItem> = self
            .songs
            .iter()
            .map(|song| {
                let liked = self.is_liked(&song.id);
                let heart = if liked {
                    Span::styled("♥", Style::default().fg(colors::LIKED))
                } else {
                    Span::styled("♡", Style::default().fg(colors::NEUTRAL))
                };

                let title = Line::from(vec![
                    Span::styled("▣ ", Style::default().fg(colors::PRIMARY)),
                    Span::styled(
                        truncate(&song.title, text_width),
                        Style::default()
                            .fg(colors::TEXT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    heart,
                ]);
                let artist = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        truncate(&song.artist, text_width),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ]);

                ListItem::new(vec![title, artist])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(colors::SECONDARY))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

#[async_trait]
impl View for PlaylistView {
    fn route(&self) -> Route {
        Route::Playlist
    }

    async fn on_mount(&mut self, _ctx: &AppContext) {
        info!(songs = self.songs.len(), "playlist_mounted");
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
            .split(area);

        self.render_header(f, chunks[0]);
        self.render_list(f, chunks[1]);
    }

    async fn handle_input(&mut self, key: KeyEvent, _ctx: &AppContext) -> Option<Action> {
        let len = self.songs.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| if i >= len - 1 { i } else { i + 1 });
                    self.list_state.select(Some(i));
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| if i == 0 { 0 } else { i - 1 });
                    self.list_state.select(Some(i));
                }
                None
            }
            KeyCode::Char('g') => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
                None
            }
            KeyCode::Char('G') => {
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
                None
            }
            KeyCode::Char('l') => {
                let id = self
                    .list_state
                    .selected()
                    .and_then(|i| self.songs.get(i))
                    .map(|s| s.id.clone());
                if let Some(id) = id {
                    self.toggle_like(&id);
                }
                None
            }
            KeyCode::Char('p') => self.play_all(),
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| self.songs.get(i))
                .map(|song| self.select_song(song)),
            _ => None,
        }
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("↑/↓", "move"),
            ("Enter", "open"),
            ("l", "like"),
            ("p", "play all"),
            ("q", "quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::crossterm::event::KeyModifiers;

    fn context(config: Config) -> AppContext {
        let (tx, _rx) = flume::unbounded();
        AppContext::new(config, tx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn liked_flags(view: &PlaylistView) -> Vec<bool> {
        view.songs().iter().map(|s| view.is_liked(&s.id)).collect()
    }

    #[test]
    fn toggle_flips_only_that_row_and_twice_restores() {
        let ctx = context(Config::default());
        let mut view = PlaylistView::new(&ctx);
        let before = liked_flags(&view);

        assert_eq!(view.toggle_like(&"3".into()), Some(false));
        assert_eq!(liked_flags(&view), vec![false, true, false, true]);

        assert_eq!(view.toggle_like(&"3".into()), Some(true));
        assert_eq!(liked_flags(&view), before);
    }

    #[test]
    fn toggle_unknown_id_changes_nothing() {
        let ctx = context(Config::default());
        let mut view = PlaylistView::new(&ctx);

        assert_eq!(view.toggle_like(&"nope".into()), None);
        assert_eq!(liked_flags(&view), vec![false, true, true, true]);
    }

    #[test]
    fn local_toggle_does_not_touch_context_store() {
        let ctx = context(Config::default());
        let mut view = PlaylistView::new(&ctx);

        view.toggle_like(&"1".into());
        assert!(!ctx.likes.is_liked(&"1".into()));
    }

    #[test]
    fn shared_toggle_writes_through() {
        let mut config = Config::default();
        config.likes.shared = true;
        let ctx = context(config);
        let mut view = PlaylistView::new(&ctx);

        assert_eq!(view.toggle_like(&"1".into()), Some(true));
        assert!(ctx.likes.is_liked(&"1".into()));
        assert!(view.songs()[0].liked);
    }

    #[test]
    fn shared_rows_follow_store_changes_made_elsewhere() {
        let mut config = Config::default();
        config.likes.shared = true;
        let ctx = context(config);
        let view = PlaylistView::new(&ctx);

        let mut other = ctx.likes.clone();
        other.toggle(&"1".into());
        other.toggle(&"2".into());

        assert!(view.is_liked(&"1".into()));
        assert!(view.songs()[0].liked);
        assert!(!view.is_liked(&"2".into()));
        assert!(!view.songs()[1].liked);
    }

    #[tokio::test]
    async fn enter_opens_highlighted_song() {
        let ctx = context(Config::default());
        let mut view = PlaylistView::new(&ctx);

        view.handle_input(key(KeyCode::Down), &ctx).await;
        let action = view.handle_input(key(KeyCode::Enter), &ctx).await;

        let Some(Action::Navigate(Route::Player(params))) = &action else {
            panic!("expected navigation, got {action:?}");
        };
        assert_eq!(params.song_id.as_str(), "2");
        assert_eq!(params.song_title, "Fallaste Corazón");
    }

    #[tokio::test]
    async fn play_all_ignores_highlight() {
        let ctx = context(Config::default());
        let mut view = PlaylistView::new(&ctx);
        view.select(3);

        let action = view.handle_input(key(KeyCode::Char('p')), &ctx).await;

        let Some(Action::Navigate(Route::Player(params))) = &action else {
            panic!("expected navigation, got {action:?}");
        };
        assert_eq!(params.song_id.as_str(), "1");
    }

    #[tokio::test]
    async fn selection_stays_in_bounds() {
        let ctx = context(Config::default());
        let mut view = PlaylistView::new(&ctx);

        view.handle_input(key(KeyCode::Up), &ctx).await;
        assert_eq!(view.selected(), Some(0));

        for _ in 0..10 {
            view.handle_input(key(KeyCode::Char('j')), &ctx).await;
        }
        assert_eq!(view.selected(), Some(3));

        view.handle_input(key(KeyCode::Char('g')), &ctx).await;
        assert_eq!(view.selected(), Some(0));
    }

    #[tokio::test]
    async fn like_key_toggles_highlighted_row() {
        let ctx = context(Config::default());
        let mut view = PlaylistView::new(&ctx);
        view.select(1);

        let action = view.handle_input(key(KeyCode::Char('l')), &ctx).await;

        assert_eq!(action, None);
        assert_eq!(liked_flags(&view), vec![false, false, true, true]);
    }
}
