//! Terminal rendering of the deck.
//!
//! Layout: the deck area (front card over the next one) on the left, the
//! kept queue on the right, a one-line footer with hints and status.
//! Rendering records the front card's resting rect on the app so mouse
//! presses can be hit-tested against it.

mod card;
mod helpers;
mod panels;
mod theme;

pub use card::{card_rect, tilt_label, tint_for_offset};
pub use helpers::{centered_rect, shift_within, truncate_to_width};
pub use panels::EMPTY_MESSAGE;

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;

/// Split the screen into (deck, queue panel, footer).
pub fn layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[0]);
    (columns[0], columns[1], rows[1])
}

/// Render one frame at `now`.
pub fn render(frame: &mut Frame, app: &mut App, now: Instant) {
    let (deck_area, queue_area, footer_area) = layout(frame.area());

    render_deck(frame, deck_area, app, now);
    panels::render_queue_panel(frame, queue_area, app);
    panels::render_footer(frame, footer_area, app);
}

fn render_deck(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    let Some(front) = app.deck.front().cloned() else {
        app.card_area = None;
        panels::render_empty(frame, area, app);
        return;
    };

    let rest = card_rect(area);
    app.card_area = Some(rest);

    if let Some(next) = app.deck.stack().cards().nth(1) {
        card::render_next_card(frame, rest, area, next);
    }

    let scale = app.config.cell_scale;
    let travel = f64::from(area.width) * scale.width;
    let transform = app.deck.front_transform(now, travel);
    card::render_front_card(
        frame,
        rest,
        area,
        &front,
        transform,
        scale.columns_for(transform.offset_x),
        app.config.swipe_threshold,
    );
}
