use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x001db954);
pub const SECONDARY: Color = Color::from_u32(0x00181818);
pub const NEUTRAL: Color = Color::from_u32(0x00808080);
pub const BACKGROUND: Color = Color::from_u32(0x00121212);
pub const TEXT: Color = Color::White;
pub const LIKED: Color = Color::Red;
