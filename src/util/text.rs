use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to at most `max_width` terminal columns, ending in `…` when
/// anything was dropped.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_text() {
        assert_eq!(truncate("Cien Años", 20), "Cien Años");
    }

    #[test]
    fn cuts_long_text_with_ellipsis() {
        let cut = truncate("Fallaste Corazón", 8);

        assert_eq!(cut, "Fallast…");
        assert_eq!(cut.width(), 8);
    }

    #[test]
    fn counts_wide_characters_by_columns() {
        assert_eq!(truncate("日本語の歌", 5), "日本…");
    }

    #[test]
    fn zero_width_budget() {
        assert_eq!(truncate("abc", 0), "");
    }
}
