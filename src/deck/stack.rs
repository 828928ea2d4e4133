//! The deck of undecided cards and the kept queue.

use std::collections::{HashSet, VecDeque};

use crate::models::Card;

/// Owns the ordered deck (front = visible card) and the kept queue
/// (newest first).
///
/// Invariant: no two cards in the stack share an `id`.
#[derive(Debug, Clone, Default)]
pub struct StackManager {
    stack: VecDeque<Card>,
    queue: VecDeque<Card>,
}

impl StackManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager seeded with `cards`, dropping duplicate ids.
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut manager = Self::new();
        manager.append(cards);
        manager
    }

    /// The active card, if any.
    pub fn front(&self) -> Option<&Card> {
        self.stack.front()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stack.iter()
    }

    /// Kept cards, newest first.
    pub fn queue(&self) -> impl Iterator<Item = &Card> {
        self.queue.iter()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stack.iter().any(|card| card.id == id)
    }

    /// Remove and return the front card. No-op on an empty stack.
    pub fn pop_front(&mut self) -> Option<Card> {
        self.stack.pop_front()
    }

    /// Prepend a saved card to the queue.
    pub fn enqueue_saved(&mut self, card: Card) {
        self.queue.push_front(card);
    }

    /// Append fetched cards to the tail, preserving their order.
    ///
    /// Cards whose id is already in the stack (or earlier in the same batch)
    /// are dropped. Returns how many cards were added.
    pub fn append(&mut self, cards: impl IntoIterator<Item = Card>) -> usize {
        let mut seen: HashSet<String> = self.stack.iter().map(|card| card.id.clone()).collect();
        let before = self.stack.len();
        for card in cards {
            if seen.insert(card.id.clone()) {
                self.stack.push_back(card);
            } else {
                tracing::debug!("Dropping duplicate card id={}", card.id);
            }
        }
        self.stack.len() - before
    }
}
