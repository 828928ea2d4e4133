//! Front card and the card peeking out behind it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::helpers::{centered_rect, shift_within, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_PRICE, RGB_NEUTRAL, RGB_PASS, RGB_SAVE,
};
use crate::gesture::CardTransform;
use crate::models::Card;

const CARD_WIDTH: u16 = 40;
const CARD_HEIGHT: u16 = 12;

/// Resting position of the front card inside the deck area.
pub fn card_rect(area: Rect) -> Rect {
    centered_rect(area, CARD_WIDTH, CARD_HEIGHT.min(area.height.saturating_sub(1)))
}

/// Border color for a card displaced by `offset_x`: neutral at rest, fully
/// green (save) or red (pass) once the offset reaches `threshold`.
pub fn tint_for_offset(offset_x: f64, threshold: f64) -> Color {
    if threshold <= 0.0 || offset_x == 0.0 {
        return COLOR_BORDER;
    }
    let t = (offset_x.abs() / threshold).min(1.0);
    let target = if offset_x > 0.0 { RGB_SAVE } else { RGB_PASS };
    let mix =
        |from: u8, to: u8| (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8;
    Color::Rgb(
        mix(RGB_NEUTRAL.0, target.0),
        mix(RGB_NEUTRAL.1, target.1),
        mix(RGB_NEUTRAL.2, target.2),
    )
}

/// Short label for the card's tilt, e.g. `↻ 12°`. Empty when upright.
pub fn tilt_label(rotation_deg: f64) -> String {
    let rounded = rotation_deg.round();
    if rounded == 0.0 {
        String::new()
    } else if rounded > 0.0 {
        format!("↻ {}°", rounded as i64)
    } else {
        format!("↺ {}°", rounded.abs() as i64)
    }
}

/// Stamp shown once a drag is far enough to count.
fn stamp(offset_x: f64, threshold: f64) -> Option<(&'static str, Color)> {
    if offset_x > threshold {
        Some(("SAVE", Color::Rgb(RGB_SAVE.0, RGB_SAVE.1, RGB_SAVE.2)))
    } else if offset_x < -threshold {
        Some(("PASS", Color::Rgb(RGB_PASS.0, RGB_PASS.1, RGB_PASS.2)))
    } else {
        None
    }
}

fn card_lines(card: &Card, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&card.title, width),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let byline = match (card.brand.is_empty(), card.category.is_empty()) {
        (false, false) => format!("{} · {}", card.brand, card.category),
        (false, true) => card.brand.clone(),
        (true, false) => card.category.clone(),
        (true, true) => String::new(),
    };
    if !byline.is_empty() {
        lines.push(Line::from(truncate_to_width(&byline, width)));
    }
    if card.price > 0.0 {
        lines.push(Line::from(Span::styled(
            card.display_price(),
            Style::default().fg(COLOR_PRICE),
        )));
    }
    if !card.tags.is_empty() {
        let tags = card
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            truncate_to_width(&tags, width),
            Style::default().fg(COLOR_DIM),
        )));
    }
    if !card.image_ref.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("[{}]", card.image_ref), width),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

/// Render the next card as a dim outline one row below the front card.
pub fn render_next_card(frame: &mut Frame, rest: Rect, bounds: Rect, card: &Card) {
    let Some(area) = shift_within(Rect { y: rest.y + 1, ..rest }, 1, bounds) else {
        return;
    };
    if area.bottom() > bounds.bottom() {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_DIM))
        .title(Span::styled(
            truncate_to_width(&card.title, area.width.saturating_sub(4) as usize),
            Style::default().fg(COLOR_DIM),
        ));
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
}

/// Render the front card displaced by `transform`. Nothing is drawn once the
/// card is shifted entirely out of `bounds`.
pub fn render_front_card(
    frame: &mut Frame,
    rest: Rect,
    bounds: Rect,
    card: &Card,
    transform: CardTransform,
    offset_columns: i32,
    threshold: f64,
) {
    let Some(area) = shift_within(rest, offset_columns, bounds) else {
        return;
    };
    let tint = tint_for_offset(transform.offset_x, threshold);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(tint));
    let tilt = tilt_label(transform.rotation_deg);
    if !tilt.is_empty() {
        block = block.title_top(
            Line::from(Span::styled(tilt, Style::default().fg(tint))).alignment(Alignment::Right),
        );
    }
    if let Some((label, color)) = stamp(transform.offset_x, threshold) {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" {} ", label),
                Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ))
            .alignment(Alignment::Left),
        );
    }

    let inner_width = rest.width.saturating_sub(4) as usize;
    let content = Paragraph::new(card_lines(card, inner_width)).block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(content, area);
}
