use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

/// Navigation bar above the active view.
pub struct NavHeader<'a> {
    title: &'a str,
    can_go_back: bool,
}

impl<'a> NavHeader<'a> {
    pub fn new(title: &'a str, can_go_back: bool) -> Self {
        Self { title, can_go_back }
    }
}

impl Widget for NavHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .style(Style::default().bg(colors::SECONDARY).fg(colors::TEXT));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(Span::styled(
            self.title,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(inner, buf);

        if self.can_go_back && inner.width > 8 {
            buf.set_string(
                inner.x,
                inner.y,
                "← Esc",
                Style::default().fg(colors::NEUTRAL),
            );
        }
    }
}
