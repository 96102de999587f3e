use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    widgets::Widget,
};

const THUMB: &str = "●";
const TRACK: &str = "─";

/// Horizontal position bar with a thumb, drawn from a `[0, 1]` ratio.
///
/// Display only: nothing here reacts to input, so moving the thumb is not a
/// way to seek.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scrubber {
    ratio: f64,
    played_style: Style,
    thumb_style: Style,
    remaining_style: Style,
}

impl Scrubber {
    /// Out-of-range values are clamped.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self
    }

    pub fn played_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.played_style = style.into();
        self
    }

    pub fn thumb_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.thumb_style = style.into();
        self
    }

    pub fn remaining_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.remaining_style = style.into();
        self
    }

    /// Column of the thumb inside an area `width` cells wide.
    pub fn thumb_offset(&self, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let last = f64::from(width - 1);
        (last * self.ratio).round() as u16
    }
}

impl Widget for Scrubber {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let row = area.top() + area.height / 2;
        let thumb = area.left() + self.thumb_offset(area.width);

        for x in area.left()..area.right() {
            let (symbol, style) = if x == thumb {
                (THUMB, self.thumb_style)
            } else if x < thumb {
                (symbols::line::THICK_HORIZONTAL, self.played_style)
            } else {
                (TRACK, self.remaining_style)
            };
            buf[(x, row)].set_symbol(symbol).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn thumb_tracks_ratio() {
        let scrubber = Scrubber::default();
        assert_eq!(scrubber.clone().ratio(0.0).thumb_offset(11), 0);
        assert_eq!(scrubber.clone().ratio(0.5).thumb_offset(11), 5);
        assert_eq!(scrubber.ratio(1.0).thumb_offset(11), 10);
    }

    #[test]
    fn clamps_out_of_range_ratios() {
        assert_eq!(Scrubber::default().ratio(3.0).thumb_offset(5), 4);
        assert_eq!(Scrubber::default().ratio(-1.0).thumb_offset(5), 0);
        assert_eq!(Scrubber::default().ratio(f64::NAN).thumb_offset(5), 0);
    }

    #[test]
    fn renders_played_thumb_and_remaining() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        Scrubber::default().ratio(0.5).render(area, &mut buf);

        assert_eq!(row(&buf), "━━●──");
    }
}
