//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`RecordingSupplier`] - Card supplier with scripted batches and call log
//! - [`RecordingFeedbackSink`] - Feedback sink that keeps every decision

pub mod http;
pub mod recording;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use recording::{RecordingFeedbackSink, RecordingSupplier};
