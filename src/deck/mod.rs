//! Card stack lifecycle.
//!
//! - [`stack`] - [`StackManager`]: the deck and the kept queue
//! - [`leaving`] - [`LeavingController`]: exit animation and input gating
//! - [`refill`] - [`RefillPolicy`]: when and how many cards to request
//! - [`engine`] - [`Deck`]: all of the above plus gesture tracking

pub mod engine;
pub mod leaving;
pub mod refill;
pub mod stack;

pub use engine::{Deck, DeckCommand, DeckEffect};
pub use leaving::{LeavingController, LeavingState};
pub use refill::RefillPolicy;
pub use stack::StackManager;
