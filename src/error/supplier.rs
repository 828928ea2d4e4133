//! Errors from the external collaborators.
//!
//! Neither error ever reaches the deck: suppliers log a [`SupplierError`] and
//! return no cards, feedback sinks log a [`FeedbackError`] and move on.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Failure while fetching cards.
#[derive(Debug, Error)]
pub enum SupplierError {
    #[error("card request failed: {0}")]
    Http(#[from] HttpError),

    #[error("card service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode cards: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SupplierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SupplierError::Http(err) => http_category(err),
            SupplierError::Status { status, .. } => status_category(*status),
            SupplierError::Decode(_) => ErrorCategory::Client,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SupplierError::Http(_) => "SUPPLIER_HTTP",
            SupplierError::Status { .. } => "SUPPLIER_STATUS",
            SupplierError::Decode(_) => "SUPPLIER_DECODE",
        }
    }
}

/// Failure while recording swipe feedback.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback request failed: {0}")]
    Http(#[from] HttpError),

    #[error("feedback service returned status {status}")]
    Status { status: u16 },

    #[error("could not encode feedback: {0}")]
    Encode(#[from] serde_json::Error),
}

impl FeedbackError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FeedbackError::Http(err) => http_category(err),
            FeedbackError::Status { status } => status_category(*status),
            FeedbackError::Encode(_) => ErrorCategory::Client,
        }
    }
}

fn http_category(err: &HttpError) -> ErrorCategory {
    match err {
        HttpError::ServerError { status, .. } => status_category(*status),
        HttpError::InvalidUrl(_) => ErrorCategory::Configuration,
        _ => ErrorCategory::Network,
    }
}

fn status_category(status: u16) -> ErrorCategory {
    if status >= 500 || status == 429 || status == 408 {
        ErrorCategory::Server
    } else {
        ErrorCategory::Client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_error_categories() {
        let timeout: SupplierError = HttpError::Timeout("10s".to_string()).into();
        assert_eq!(timeout.category(), ErrorCategory::Network);
        assert!(timeout.category().is_retryable());

        let unavailable = SupplierError::Status {
            status: 503,
            message: "busy".to_string(),
        };
        assert_eq!(unavailable.category(), ErrorCategory::Server);

        let not_found = SupplierError::Status {
            status: 404,
            message: "missing".to_string(),
        };
        assert_eq!(not_found.category(), ErrorCategory::Client);

        let decode: SupplierError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
        assert_eq!(decode.category(), ErrorCategory::Client);
        assert_eq!(decode.error_code(), "SUPPLIER_DECODE");
    }

    #[test]
    fn test_supplier_error_display() {
        let err = SupplierError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "card service returned status 500: boom");
    }

    #[test]
    fn test_feedback_error_categories() {
        let bad_url: FeedbackError = HttpError::InvalidUrl("::".to_string()).into();
        assert_eq!(bad_url.category(), ErrorCategory::Configuration);
        assert_eq!(
            FeedbackError::Status { status: 502 }.category(),
            ErrorCategory::Server
        );
    }
}
