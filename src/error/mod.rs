//! Error handling for swipedeck.
//!
//! Nothing in the deck core is fatal. Errors fall into two groups:
//!
//! - **Collaborator errors** ([`SupplierError`], [`FeedbackError`]) are logged
//!   by the adapter that hit them and degrade to "no cards this round" or
//!   "feedback dropped".
//! - **Startup errors** ([`ConfigError`], terminal I/O) propagate to `main`
//!   through [`DeckError`].
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout | Yes |
//! | Server | Card service 5xx / 429 | Yes |
//! | Client | Undecodable payloads, 4xx | No |
//! | System | Terminal / filesystem | No |
//! | Configuration | Bad env or CLI values | No |

mod category;
mod config;
mod deck_error;
mod supplier;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use deck_error::{DeckError, DeckResult};
pub use supplier::{FeedbackError, SupplierError};
