//! Error category classification.
//!
//! Categories drive how a failure is handled: whether the next natural
//! trigger may retry it, and what to tell the user when it reaches `main`.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout. Generally transient.
    Network,

    /// Backend errors (HTTP 5xx). Generally transient.
    Server,

    /// Malformed responses or rejected requests. Not retryable.
    Client,

    /// Terminal and filesystem errors.
    System,

    /// Invalid environment or CLI settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => {
                "Check your internet connection; cards refill on the next swipe"
            }
            ErrorCategory::Server => "The card service may be down. Press r to retry later",
            ErrorCategory::Client => "The card service returned data this version cannot read",
            ErrorCategory::System => "Check that the terminal supports raw mode and mouse capture",
            ErrorCategory::Configuration => "Check the SWIPEDECK_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::System.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }

    #[test]
    fn test_category_recovery_hint() {
        assert!(ErrorCategory::Configuration
            .recovery_hint()
            .contains("SWIPEDECK_"));
        assert!(ErrorCategory::Server.recovery_hint().contains("retry"));
    }
}
