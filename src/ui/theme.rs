use ratatui::style::Color;

pub const SPACE_BG: Color = Color::Rgb(0x09, 0x0a, 0x0f);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HERO_TEXT: Color = Color::Rgb(0x93, 0xc5, 0xfd);
pub const BODY_TEXT: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TAB_ACTIVE_BG: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const TAB_ACTIVE_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const GLOW: Color = Color::Rgb(0x00, 0xff, 0xff);
pub const CARD_ACCENT: Color = Color::Rgb(0x6b, 0x21, 0xa8);
