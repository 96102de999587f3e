use std::time::Duration;

use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    config::SkipBehavior,
    event::events::{Event, ViewId},
    library::{LikeStore, LikedMap, SongId, catalog::SkipDirection},
    playback::{Playback, PlaybackState, ProgressTicker},
    ui::{
        components::{cover::CoverArt, gauge::Scrubber},
        context::AppContext,
        route::{PlayerParams, Route},
        traits::{Action, View},
    },
    util::{colors, text::truncate},
};

/// The now-playing screen for one song.
///
/// Everything it shows comes from the params it was pushed with. Playback
/// and likes are per instance and start over on every mount.
pub struct PlayerView {
    id: ViewId,
    params: PlayerParams,
    playback: Playback,
    ticker: Option<ProgressTicker>,
    tick_interval: Duration,
    skip: SkipBehavior,
    likes: Box<dyn LikeStore>,
}

impl PlayerView {
    pub fn new(params: PlayerParams, ctx: &AppContext) -> Self {
        let playback_config = &ctx.config.playback;
        let likes: Box<dyn LikeStore> = match ctx.shared_likes() {
            Some(shared) => Box::new(shared),
            None => Box::new(LikedMap::new()),
        };

        Self {
            id: Uuid::new_v4(),
            params,
            playback: Playback::new(playback_config.step()),
            ticker: None,
            tick_interval: playback_config.tick_interval(),
            skip: playback_config.skip,
            likes,
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.id
    }

    pub fn params(&self) -> &PlayerParams {
        &self.params
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn is_liked(&self, id: &SongId) -> bool {
        self.likes.is_liked(id)
    }

    pub fn toggle_play(&mut self, ctx: &AppContext) -> PlaybackState {
        let state = self.playback.toggle();
        self.ticker = match state {
            PlaybackState::Playing => Some(ProgressTicker::spawn(
                self.id,
                self.tick_interval,
                ctx.event_tx.clone(),
            )),
            PlaybackState::Paused | PlaybackState::Finished => None,
        };

        info!(
            view_id = %self.id,
            song_id = %self.params.song_id,
            ?state,
            percent = self.playback.progress().percent(),
            "player_toggle_play"
        );
        state
    }

    pub fn toggle_like(&mut self, id: &SongId) -> bool {
        let liked = self.likes.toggle(id);
        info!(view_id = %self.id, song_id = %id, liked, "player_toggle_like");
        liked
    }

    /// The route next/previous push.
    pub fn skip(&self, direction: SkipDirection, ctx: &AppContext) -> Action {
        let params = match self.skip {
            SkipBehavior::Repeat => self.params.clone(),
            SkipBehavior::Adjacent => {
                match ctx.catalog.adjacent(&self.params.song_id, direction) {
                    Ok(song) => PlayerParams::from(song),
                    Err(e) => {
                        warn!(song_id = %self.params.song_id, error = %e, "skip_fallback_to_repeat");
                        self.params.clone()
                    }
                }
            }
        };

        Action::Navigate(Route::Player(params))
    }

    fn on_tick(&mut self) {
        if !self.playback.tick() {
            return;
        }

        if self.playback.state() == PlaybackState::Finished {
            self.ticker = None;
            info!(view_id = %self.id, song_id = %self.params.song_id, "player_finished");
        }
    }

    fn render_controls(&self) -> Line<'static> {
        let play_pause = if self.playback.state().is_playing() {
            "⏸"
        } else {
            "▶"
        };
        let heart = if self.likes.is_liked(&self.params.song_id) {
            Span::styled("♥", Style::default().fg(colors::LIKED))
        } else {
            Span::styled("♡", Style::default().fg(colors::NEUTRAL))
        };

        Line::from(vec![
            Span::styled("⏮", Style::default().fg(colors::TEXT)),
            Span::raw("     "),
            Span::styled(
                play_pause,
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("     "),
            Span::styled("⏭", Style::default().fg(colors::TEXT)),
            Span::raw("     "),
            heart,
        ])
    }
}

#[async_trait]
impl View for PlayerView {
    fn route(&self) -> Route {
        Route::Player(self.params.clone())
    }

    async fn on_mount(&mut self, _ctx: &AppContext) {
        info!(view_id = %self.id, song_id = %self.params.song_id, "player_mounted");
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let art_width = chunks[0].width.min(chunks[0].height.saturating_mul(2).max(12));
        let art_area = Rect {
            x: chunks[0].x + (chunks[0].width.saturating_sub(art_width)) / 2,
            width: art_width,
            ..chunks[0]
        };
        f.render_widget(
            CoverArt::new(&self.params.album_cover_url).show_url(false),
            art_area,
        );

        let width = area.width as usize;
        f.render_widget(
            Paragraph::new(Span::styled(
                truncate(&self.params.song_title, width),
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            chunks[2],
        );
        f.render_widget(
            Paragraph::new(Span::styled(
                truncate(&self.params.song_artist, width),
                Style::default().fg(colors::NEUTRAL),
            ))
            .alignment(Alignment::Center),
            chunks[3],
        );

        let progress = self.playback.progress();
        let bar_width = (u32::from(area.width) * 4 / 5) as u16;
        let bar_area = Rect {
            x: area.x + (area.width - bar_width) / 2,
            width: bar_width,
            ..chunks[5]
        };
        f.render_widget(
            Scrubber::default()
                .ratio(progress.ratio())
                .played_style(Style::default().fg(colors::PRIMARY))
                .thumb_style(Style::default().fg(colors::PRIMARY))
                .remaining_style(Style::default().fg(colors::TEXT)),
            bar_area,
        );
        f.render_widget(
            Paragraph::new(format!("{}%", progress.percent()))
                .style(Style::default().fg(colors::TEXT))
                .alignment(Alignment::Center),
            chunks[6],
        );

        f.render_widget(
            Paragraph::new(self.render_controls()).alignment(Alignment::Center),
            chunks[8],
        );
        f.render_widget(
            Paragraph::new("📖 View lyrics")
                .style(Style::default().fg(colors::TEXT))
                .alignment(Alignment::Center),
            chunks[9],
        );
    }

    async fn handle_input(&mut self, key: KeyEvent, ctx: &AppContext) -> Option<Action> {
        match key.code {
            KeyCode::Char(' ') => {
                self.toggle_play(ctx);
                None
            }
            KeyCode::Char('n') => Some(self.skip(SkipDirection::Next, ctx)),
            KeyCode::Char('b') => Some(self.skip(SkipDirection::Previous, ctx)),
            KeyCode::Char('l') => {
                let id = self.params.song_id.clone();
                self.toggle_like(&id);
                None
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::ProgressTick(id) if *id == self.id => self.on_tick(),
            Event::ProgressTick(_) => {}
        }
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("Space", "play/pause"),
            ("b/n", "prev/next"),
            ("l", "like"),
            ("Esc", "back"),
            ("q", "quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, library::Catalog};
    use ratatui::crossterm::event::KeyModifiers;

    fn context(config: Config) -> (AppContext, flume::Receiver<Event>) {
        let (tx, rx) = flume::unbounded();
        (AppContext::new(config, tx), rx)
    }

    fn params_for(ctx: &AppContext, id: &str) -> PlayerParams {
        PlayerParams::from(ctx.catalog.get(&id.into()).unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn starts_paused_with_empty_likes() {
        let (ctx, _rx) = context(Config::default());
        let view = PlayerView::new(params_for(&ctx, "2"), &ctx);

        assert_eq!(view.playback().state(), PlaybackState::Paused);
        assert_eq!(view.playback().progress().ratio(), 0.0);
        assert!(!view.is_ticking());
        for id in ["1", "2", "3", "4"] {
            assert!(!view.is_liked(&id.into()));
        }
    }

    #[tokio::test]
    async fn ticks_for_this_view_advance_progress() {
        let (ctx, _rx) = context(Config::default());
        let mut view = PlayerView::new(params_for(&ctx, "1"), &ctx);
        let id = view.view_id();

        view.toggle_play(&ctx);
        view.on_event(&Event::ProgressTick(id), &ctx).await;
        view.on_event(&Event::ProgressTick(Uuid::new_v4()), &ctx).await;

        assert_eq!(view.playback().progress().percent(), 1);
    }

    #[tokio::test]
    async fn ticks_after_pause_are_ignored() {
        let (ctx, _rx) = context(Config::default());
        let mut view = PlayerView::new(params_for(&ctx, "1"), &ctx);
        let id = view.view_id();

        view.toggle_play(&ctx);
        view.on_event(&Event::ProgressTick(id), &ctx).await;
        view.toggle_play(&ctx);
        view.on_event(&Event::ProgressTick(id), &ctx).await;

        assert_eq!(view.playback().state(), PlaybackState::Paused);
        assert_eq!(view.playback().progress().percent(), 1);
        assert!(!view.is_ticking());
    }

    #[tokio::test]
    async fn finishing_stops_the_ticker() {
        let mut config = Config::default();
        config.playback.step_percent = 50;
        let (ctx, _rx) = context(config);
        let mut view = PlayerView::new(params_for(&ctx, "1"), &ctx);
        let id = view.view_id();

        view.toggle_play(&ctx);
        view.on_event(&Event::ProgressTick(id), &ctx).await;
        view.on_event(&Event::ProgressTick(id), &ctx).await;

        assert_eq!(view.playback().state(), PlaybackState::Finished);
        assert_eq!(view.playback().progress().ratio(), 1.0);
        assert!(!view.is_ticking());
    }

    #[tokio::test]
    async fn repeat_skip_pushes_same_song() {
        let (ctx, _rx) = context(Config::default());
        let mut view = PlayerView::new(params_for(&ctx, "2"), &ctx);

        let next = view.handle_input(key(KeyCode::Char('n')), &ctx).await;
        let prev = view.handle_input(key(KeyCode::Char('b')), &ctx).await;

        let expected = Some(Action::Navigate(Route::Player(params_for(&ctx, "2"))));
        assert_eq!(next, expected);
        assert_eq!(prev, expected);
    }

    #[tokio::test]
    async fn adjacent_skip_follows_catalog_order() {
        let mut config = Config::default();
        config.playback.skip = SkipBehavior::Adjacent;
        let (ctx, _rx) = context(config);
        let view = PlayerView::new(params_for(&ctx, "4"), &ctx);

        assert_eq!(
            view.skip(SkipDirection::Next, &ctx),
            Action::Navigate(Route::Player(params_for(&ctx, "1")))
        );
        assert_eq!(
            view.skip(SkipDirection::Previous, &ctx),
            Action::Navigate(Route::Player(params_for(&ctx, "3")))
        );
    }

    #[tokio::test]
    async fn adjacent_skip_on_unknown_song_repeats() {
        let mut config = Config::default();
        config.playback.skip = SkipBehavior::Adjacent;
        let (tx, _rx) = flume::unbounded();
        let ctx = AppContext::with_catalog(config, Catalog::seed(), tx);
        let params = PlayerParams {
            song_id: "ghost".into(),
            song_title: "Ghost".into(),
            song_artist: "Nobody".into(),
            album_cover_url: String::new(),
        };
        let view = PlayerView::new(params.clone(), &ctx);

        assert_eq!(
            view.skip(SkipDirection::Next, &ctx),
            Action::Navigate(Route::Player(params))
        );
    }

    #[tokio::test]
    async fn like_key_flips_own_map_only() {
        let (ctx, _rx) = context(Config::default());
        let mut view = PlayerView::new(params_for(&ctx, "1"), &ctx);

        view.handle_input(key(KeyCode::Char('l')), &ctx).await;

        assert!(view.is_liked(&"1".into()));
        assert!(!ctx.likes.is_liked(&"1".into()));
    }

    #[tokio::test]
    async fn shared_likes_start_from_catalog() {
        let mut config = Config::default();
        config.likes.shared = true;
        let (ctx, _rx) = context(config);
        let mut view = PlayerView::new(params_for(&ctx, "2"), &ctx);

        assert!(view.is_liked(&"2".into()));
        assert!(!view.toggle_like(&"2".into()));
        assert!(!ctx.likes.is_liked(&"2".into()));
    }
}
