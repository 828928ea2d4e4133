//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`CardSupplier`] - Source of new cards for refills
//! - [`FeedbackSink`] - Fire-and-forget recorder of swipe decisions

pub mod feedback;
pub mod http;
pub mod supplier;

pub use feedback::FeedbackSink;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use supplier::CardSupplier;
