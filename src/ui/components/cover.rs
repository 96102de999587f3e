use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::util::{colors, text::truncate};

/// Stand-in for album art. The terminal never downloads the image; it
/// draws a note glyph and, when there is room, the image URL.
pub struct CoverArt<'a> {
    url: &'a str,
    caption: Option<&'a str>,
    show_url: bool,
}

impl<'a> CoverArt<'a> {
    pub fn new(url: &'a str) -> Self {
        Self {
            url,
            caption: None,
            show_url: true,
        }
    }

    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn show_url(mut self, show_url: bool) -> Self {
        self.show_url = show_url;
        self
    }
}

impl Widget for CoverArt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let width = inner.width as usize;
        let mut lines = vec![Line::styled(
            "♪",
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(caption) = self.caption {
            lines.push(Line::styled(
                truncate(caption, width),
                Style::default().fg(colors::TEXT),
            ));
        }
        if self.show_url && !self.url.is_empty() {
            lines.push(Line::styled(
                truncate(self.url, width),
                Style::default().fg(colors::NEUTRAL),
            ));
        }

        let top_pad = (inner.height as usize).saturating_sub(lines.len()) / 2;
        let mut padded = vec![Line::default(); top_pad];
        padded.extend(lines);

        Paragraph::new(padded)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
