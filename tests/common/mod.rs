//! Common test utilities for integration tests.
//!
//! Fixtures for cards and configs, plus a builder that wires an [`App`] to
//! recording collaborators.
//!
//! # Example
//!
//! ```ignore
//! let fixture = TestAppBuilder::new().with_cards(&["c1", "c2"]).build();
//! fixture.supplier.push_batch(cards(&["c3"]));
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::{Duration, Instant};

use swipedeck::app::{App, AppMessage};
use swipedeck::config::DeckConfig;
use swipedeck::deck::Deck;
use swipedeck::models::Card;

/// Cards with the given ids and a title derived from the id.
pub fn cards(ids: &[&str]) -> Vec<Card> {
    ids.iter()
        .map(|id| Card::new(*id, format!("Item {}", id)))
        .collect()
}

/// Ids of the cards on the stack, front first.
pub fn stack_ids(deck: &Deck) -> Vec<String> {
    deck.stack().cards().map(|c| c.id.clone()).collect()
}

/// Ids of the kept cards, newest first.
pub fn queue_ids(deck: &Deck) -> Vec<String> {
    deck.stack().queue().map(|c| c.id.clone()).collect()
}

/// Default exit delay plus a millisecond, for "after the animation" instants.
pub fn after_exit(start: Instant) -> Instant {
    start + DeckConfig::default().exit_delay + Duration::from_millis(1)
}

/// An App with recording collaborators.
pub struct TestApp {
    pub app: App,
    pub supplier: RecordingSupplier,
    pub feedback: RecordingFeedbackSink,
}

impl TestApp {
    /// Wait for the next background message, failing the test after a second.
    pub async fn recv(&mut self) -> AppMessage {
        tokio::time::timeout(Duration::from_secs(1), self.app.next_message())
            .await
            .expect("timed out waiting for app message")
            .expect("app message channel closed")
    }

    /// Receive and apply one background message.
    pub async fn pump(&mut self) {
        let msg = self.recv().await;
        self.app.handle_message(msg);
    }
}

/// Builder for creating test App instances.
#[derive(Default)]
pub struct TestAppBuilder {
    config: Option<DeckConfig>,
    initial: Vec<Card>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: DeckConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_cards(mut self, ids: &[&str]) -> Self {
        self.initial = cards(ids);
        self
    }

    pub fn build(self) -> TestApp {
        let supplier = RecordingSupplier::new();
        let feedback = RecordingFeedbackSink::new();
        let app = App::new(
            self.config.unwrap_or_default(),
            Arc::new(supplier.clone()),
            Arc::new(feedback.clone()),
        )
        .with_cards(self.initial);
        TestApp {
            app,
            supplier,
            feedback,
        }
    }
}
