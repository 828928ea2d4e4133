//! Small text and geometry helpers shared by the render functions.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner animation frames
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Truncate `s` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// `rect` moved `dx` columns and clipped to `bounds`. `None` once fully off-stage.
pub fn shift_within(rect: Rect, dx: i32, bounds: Rect) -> Option<Rect> {
    let left = i32::from(rect.x) + dx;
    let right = left + i32::from(rect.width);
    let clipped_left = left.max(i32::from(bounds.x));
    let clipped_right = right.min(i32::from(bounds.x) + i32::from(bounds.width));
    if clipped_right <= clipped_left {
        return None;
    }
    Some(Rect::new(
        clipped_left as u16,
        rect.y,
        (clipped_right - clipped_left) as u16,
        rect.height,
    ))
}
