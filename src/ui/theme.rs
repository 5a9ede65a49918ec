use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7c, 0x9c, 0xf5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CORRECT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const INCORRECT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTION: Color = Color::Rgb(0x26, 0x26, 0x26);
