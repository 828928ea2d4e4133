//! AppMessage enum for async communication within the application.

use crate::models::Card;

/// Messages received from background tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A refill request finished; `cards` may be empty.
    CardsFetched { request_id: u64, cards: Vec<Card> },
}
