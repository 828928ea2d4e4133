//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`HttpCardSupplier`] - Cards from a remote card service
//! - [`CatalogSupplier`] - Offline cards from a built-in catalogue
//! - [`HttpFeedbackSink`] - Posts decisions to a feedback endpoint
//! - [`LogFeedbackSink`] - Logs decisions only
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::RecordingSupplier`] - Scripted card batches
//! - [`mock::RecordingFeedbackSink`] - Captured decisions

pub mod catalog_supplier;
pub mod feedback;
pub mod http_supplier;
pub mod mock;
pub mod reqwest_http;

pub use catalog_supplier::CatalogSupplier;
pub use feedback::{FeedbackRecord, HttpFeedbackSink, LogFeedbackSink};
pub use http_supplier::HttpCardSupplier;
pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
