//! Application state and logic for the TUI.
//!
//! [`App`] wraps the synchronous [`Deck`] and executes the effects it returns:
//! refill requests become background tasks whose results come back as
//! [`AppMessage`]s, feedback records go straight to the sink.

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::config::DeckConfig;
use crate::deck::{Deck, DeckEffect};
use crate::models::Card;
use crate::traits::{CardSupplier, FeedbackSink};

/// Main application state
pub struct App {
    /// The deck core
    pub deck: Deck,
    /// Settings the deck was built from
    pub config: DeckConfig,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever visible state changes
    pub needs_redraw: bool,
    /// Tick counter for the spinner
    pub tick_count: u64,
    /// Screen area of the front card from the last frame, used for hit testing
    pub card_area: Option<Rect>,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the run loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    supplier: Arc<dyn CardSupplier>,
    feedback: Arc<dyn FeedbackSink>,
    /// Cleared on shutdown; background tasks check it before reporting back
    alive: Arc<AtomicBool>,
    in_flight: HashSet<u64>,
    next_request_id: u64,
}

impl App {
    pub fn new(
        config: DeckConfig,
        supplier: Arc<dyn CardSupplier>,
        feedback: Arc<dyn FeedbackSink>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            deck: Deck::new(&config),
            config,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            card_area: None,
            message_tx,
            message_rx: Some(message_rx),
            supplier,
            feedback,
            alive: Arc::new(AtomicBool::new(true)),
            in_flight: HashSet::new(),
            next_request_id: 0,
        }
    }

    /// Start with `cards` already on the stack.
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = Deck::with_cards(&self.config, cards);
        self
    }

    /// Run the initial refill check. Call once before the first frame.
    pub fn mount(&mut self) {
        let effects = self.deck.mount();
        self.execute(effects);
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.shutdown();
    }

    /// Tear down: refill results that arrive from now on are discarded.
    pub fn shutdown(&mut self) {
        if self.alive.swap(false, Ordering::AcqRel) {
            tracing::info!(
                "Shutting down with {} refill request(s) in flight",
                self.in_flight.len()
            );
        }
        self.in_flight.clear();
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Whether any refill request is still outstanding.
    pub fn is_fetching(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Advance timers: finishes the pending exit once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let animating = self.deck.is_leaving();
        let effects = self.deck.tick(now);
        if animating || self.is_fetching() {
            self.mark_dirty();
        }
        self.execute(effects);
    }

    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if !self.is_alive() {
            tracing::debug!("Ignoring {:?} after shutdown", msg);
            return;
        }
        match msg {
            AppMessage::CardsFetched { request_id, cards } => {
                if !self.in_flight.remove(&request_id) {
                    tracing::debug!("Refill #{} was not in flight", request_id);
                }
                tracing::info!("Refill #{} returned {} card(s)", request_id, cards.len());
                let effects = self.deck.append(cards);
                self.execute(effects);
                self.mark_dirty();
            }
        }
    }

    /// Wait for the next background message, if the receiver is still owned.
    pub async fn next_message(&mut self) -> Option<AppMessage> {
        match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    /// Carry out the effects returned by the deck.
    pub fn execute(&mut self, effects: Vec<DeckEffect>) {
        for effect in effects {
            match effect {
                DeckEffect::RequestRefill { count } => self.spawn_refill(count),
                DeckEffect::RecordFeedback { card_id, direction } => {
                    self.feedback.record_feedback(&card_id, direction);
                }
            }
        }
    }

    fn spawn_refill(&mut self, count: usize) {
        if !self.is_alive() {
            return;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight.insert(request_id);
        tracing::info!("Refill #{} requesting {} card(s)", request_id, count);

        let tx = self.message_tx.clone();
        let supplier = Arc::clone(&self.supplier);
        let alive = Arc::clone(&self.alive);
        tokio::spawn(async move {
            let cards = supplier.fetch_cards(count).await;
            if !alive.load(Ordering::Acquire) {
                tracing::debug!("Dropping refill #{} result after shutdown", request_id);
                return;
            }
            let _ = tx.send(AppMessage::CardsFetched { request_id, cards });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{RecordingFeedbackSink, RecordingSupplier};
    use crate::gesture::SwipeDirection;
    use std::time::Duration;

    fn cards(ids: &[&str]) -> Vec<Card> {
        ids.iter().map(|id| Card::new(*id, id.to_uppercase())).collect()
    }

    fn app_with(
        supplier: &RecordingSupplier,
        sink: &RecordingFeedbackSink,
        initial: &[&str],
    ) -> App {
        App::new(
            DeckConfig::default(),
            Arc::new(supplier.clone()),
            Arc::new(sink.clone()),
        )
        .with_cards(cards(initial))
    }

    async fn recv(app: &mut App) -> AppMessage {
        tokio::time::timeout(Duration::from_secs(1), app.next_message())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_mount_requests_refill_below_floor() {
        let supplier = RecordingSupplier::new();
        supplier.push_batch(cards(&["c3", "c4", "c5"]));
        let sink = RecordingFeedbackSink::new();
        let mut app = app_with(&supplier, &sink, &["c1", "c2"]);

        app.mount();
        assert!(app.is_fetching());

        let msg = recv(&mut app).await;
        app.handle_message(msg);

        assert_eq!(supplier.requests(), vec![4]);
        assert_eq!(app.deck.stack().len(), 5);
        assert!(!app.is_fetching());
    }

    #[tokio::test]
    async fn test_feedback_recorded_when_decided() {
        let supplier = RecordingSupplier::new();
        let sink = RecordingFeedbackSink::new();
        let mut app = app_with(&supplier, &sink, &["c1", "c2", "c3", "c4", "c5", "c6"]);
        let start = Instant::now();

        let effects = app.deck.command(crate::deck::DeckCommand::Save, start);
        app.execute(effects);
        assert_eq!(sink.records(), vec![("c1".to_string(), SwipeDirection::Right)]);
        assert_eq!(app.deck.stack().len(), 6);

        app.tick(start + Duration::from_millis(300));
        assert_eq!(app.deck.stack().queue_len(), 1);
        assert!(!app.is_fetching());
    }

    #[tokio::test]
    async fn test_messages_after_shutdown_are_ignored() {
        let supplier = RecordingSupplier::new();
        let sink = RecordingFeedbackSink::new();
        let mut app = app_with(&supplier, &sink, &["c1"]);

        app.shutdown();
        app.handle_message(AppMessage::CardsFetched {
            request_id: 0,
            cards: cards(&["late"]),
        });
        assert_eq!(app.deck.stack().len(), 1);

        app.mount();
        assert!(supplier.requests().is_empty());
    }

    #[test]
    fn test_quit_sets_flags() {
        let supplier = RecordingSupplier::new();
        let sink = RecordingFeedbackSink::new();
        let mut app = app_with(&supplier, &sink, &[]);
        app.quit();
        assert!(app.should_quit);
        assert!(!app.is_alive());
    }
}
