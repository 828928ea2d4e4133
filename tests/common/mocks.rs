//! Mock implementations for test fixtures.
//!
//! Re-exports the doubles from `swipedeck::adapters::mock` and adds helpers
//! for canned card-service responses.

pub use swipedeck::adapters::mock::{
    MockHttpClient, MockResponse, RecordingFeedbackSink, RecordingSupplier,
};
pub use swipedeck::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a JSON response for a URL prefix.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Configures a transport failure for a URL prefix.
    pub fn with_transport_error(self, url: &str, error: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(error));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

/// JSON array of cards as a card service would return it.
pub fn cards_json(ids: &[&str]) -> String {
    let cards: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Item {}", id),
                "brand": "Oxbow",
                "category": "Shoes",
                "price": 49.5,
                "imageRef": format!("{}.png", id),
                "tags": ["new"]
            })
        })
        .collect();
    serde_json::Value::Array(cards).to_string()
}
