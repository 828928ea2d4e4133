//! Card supplier abstraction.

use async_trait::async_trait;

use crate::models::Card;

/// Source of new cards for the deck.
///
/// `fetch_cards` never fails from the caller's point of view: an
/// implementation logs its own errors and returns fewer cards than requested,
/// or none. An empty result means "no new cards this round".
#[async_trait]
pub trait CardSupplier: Send + Sync {
    /// Fetch up to `count` cards (`count >= 1`).
    async fn fetch_cards(&self, count: usize) -> Vec<Card>;
}
