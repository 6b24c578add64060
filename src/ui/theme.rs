//! Theme configuration

use iced::Color;

pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
pub const PRIMARY: Color = Color::from_rgb(0.0, 0.47, 0.71);
pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
pub const WARNING: Color = Color::from_rgb(0.95, 0.45, 0.35);
pub const SUCCESS: Color = Color::from_rgb(0.3, 0.65, 0.4);
pub const DANGER: Color = Color::from_rgb(0.8, 0.3, 0.3);
pub const CHIP: Color = Color::from_rgb(0.18, 0.25, 0.35);
