//! Color theme constants for the deck UI.

use ratatui::style::Color;

/// Resting card border
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Titles and highlights
pub const COLOR_ACCENT: Color = Color::White;

/// Secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

/// Saving (right swipe) tint, RGB
pub const RGB_SAVE: (u8, u8, u8) = (4, 181, 117);

/// Passing (left swipe) tint, RGB
pub const RGB_PASS: (u8, u8, u8) = (220, 70, 70);

/// Neutral end of the tint ramp, RGB
pub const RGB_NEUTRAL: (u8, u8, u8) = (110, 110, 110);

/// Price text
pub const COLOR_PRICE: Color = Color::LightYellow;

/// Status line while a refill is in flight
pub const COLOR_FETCHING: Color = Color::Cyan;
