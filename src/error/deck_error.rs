//! Unified error type.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::supplier::{FeedbackError, SupplierError};

/// Every error the crate can surface.
///
/// Only configuration and terminal failures propagate to `main`; collaborator
/// failures are logged where they happen and degrade to "nothing this cycle".
#[derive(Debug, Error)]
pub enum DeckError {
    #[error(transparent)]
    Supplier(#[from] SupplierError),

    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeckError::Supplier(err) => err.category(),
            DeckError::Feedback(err) => err.category(),
            DeckError::Config(_) => ErrorCategory::Configuration,
            DeckError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Message suitable for printing after the terminal is restored.
    pub fn user_message(&self) -> String {
        format!("{}\n{}", self, self.category().recovery_hint())
    }
}

/// Type alias for Results using DeckError.
pub type DeckResult<T> = Result<T, DeckError>;
