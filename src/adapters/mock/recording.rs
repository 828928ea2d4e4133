//! Recording doubles for the deck's collaborators.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use crate::gesture::SwipeDirection;
use crate::models::Card;
use crate::traits::{CardSupplier, FeedbackSink};

/// Card supplier that replays scripted batches.
///
/// Each `fetch_cards` call pops the next batch (truncated to the requested
/// count) or returns nothing once the script is exhausted. Requested counts are
/// recorded. A closed gate holds every fetch until [`open_gate`] is called.
///
/// [`open_gate`]: RecordingSupplier::open_gate
#[derive(Debug, Clone)]
pub struct RecordingSupplier {
    batches: Arc<Mutex<VecDeque<Vec<Card>>>>,
    requests: Arc<Mutex<Vec<usize>>>,
    gate: Arc<watch::Sender<bool>>,
}

impl Default for RecordingSupplier {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSupplier {
    pub fn new() -> Self {
        let (gate, _) = watch::channel(true);
        Self {
            batches: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: Arc::new(gate),
        }
    }

    /// Queue a batch for a future fetch.
    pub fn push_batch(&self, cards: Vec<Card>) {
        self.batches.lock().unwrap().push_back(cards);
    }

    /// Counts passed to `fetch_cards`, in call order.
    pub fn requests(&self) -> Vec<usize> {
        self.requests.lock().unwrap().clone()
    }

    /// Hold fetches until the gate is opened again.
    pub fn close_gate(&self) {
        self.gate.send_replace(false);
    }

    pub fn open_gate(&self) {
        self.gate.send_replace(true);
    }
}

#[async_trait]
impl CardSupplier for RecordingSupplier {
    async fn fetch_cards(&self, count: usize) -> Vec<Card> {
        self.requests.lock().unwrap().push(count);

        let mut gate = self.gate.subscribe();
        let _ = gate.wait_for(|open| *open).await;

        let mut batch = self.batches.lock().unwrap().pop_front().unwrap_or_default();
        batch.truncate(count);
        batch
    }
}

/// Feedback sink that keeps every decision in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedbackSink {
    records: Arc<Mutex<Vec<(String, SwipeDirection)>>>,
}

impl RecordingFeedbackSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(String, SwipeDirection)> {
        self.records.lock().unwrap().clone()
    }
}

impl FeedbackSink for RecordingFeedbackSink {
    fn record_feedback(&self, card_id: &str, direction: SwipeDirection) {
        self.records
            .lock()
            .unwrap()
            .push((card_id.to_string(), direction));
    }
}
