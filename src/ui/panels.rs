//! Kept-queue panel, footer and the empty-deck message.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::helpers::{truncate_to_width, SPINNER_FRAMES};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FETCHING, COLOR_PRICE};
use crate::app::App;

pub const EMPTY_MESSAGE: &str = "No more cards — press r to refill";

/// Kept cards, newest first.
pub fn render_queue_panel(frame: &mut Frame, area: Rect, app: &App) {
    let stack = app.deck.stack();
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = stack
        .queue()
        .map(|card| {
            let price = if card.price > 0.0 {
                format!(" {}", card.display_price())
            } else {
                String::new()
            };
            let title_width = width.saturating_sub(price.chars().count());
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_to_width(&card.title, title_width),
                    Style::default().fg(COLOR_ACCENT),
                ),
                Span::styled(price, Style::default().fg(COLOR_PRICE)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" Kept ({}) ", stack.queue_len()));
    frame.render_widget(List::new(items).block(block), area);
}

/// Shown in place of the card when the stack is empty.
pub fn render_empty(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(Span::styled(
        EMPTY_MESSAGE,
        Style::default().fg(COLOR_DIM),
    ))];
    if app.is_fetching() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "fetching more cards…",
            Style::default().fg(COLOR_FETCHING),
        )));
    }
    let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
    let message_area = Rect::new(area.x, top, area.width, (lines.len() as u16).min(area.height));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        message_area,
    );
}

/// Key hints on the left, stack depth and fetch status on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = Line::from(vec![
        Span::styled("←/h", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" pass  "),
        Span::styled("→/l", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" save  "),
        Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" refill  "),
        Span::styled("esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" cancel  "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ])
    .style(Style::default().fg(COLOR_DIM));
    frame.render_widget(Paragraph::new(hints), area);

    let mut status = Vec::new();
    if app.is_fetching() {
        let frame_idx = (app.tick_count / 4) as usize % SPINNER_FRAMES.len();
        status.push(Span::styled(
            format!("{} fetching… ", SPINNER_FRAMES[frame_idx]),
            Style::default().fg(COLOR_FETCHING),
        ));
    }
    status.push(Span::styled(
        format!("stack {}", app.deck.stack().len()),
        Style::default().fg(COLOR_ACCENT),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Right),
        area,
    );
}
