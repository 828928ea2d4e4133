//! Feedback sinks.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::error::FeedbackError;
use crate::gesture::SwipeDirection;
use crate::traits::{FeedbackSink, Headers, HttpClient};

/// JSON body posted to `{base}/feedback`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub card_id: String,
    pub outcome: SwipeDirection,
    pub recorded_at: String,
}

impl FeedbackRecord {
    pub fn new(card_id: &str, outcome: SwipeDirection, at: DateTime<Utc>) -> Self {
        Self {
            card_id: card_id.to_string(),
            outcome,
            recorded_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Posts each decision to a feedback endpoint from a background task.
///
/// `record_feedback` returns immediately. Nothing is retried.
#[derive(Debug)]
pub struct HttpFeedbackSink<C> {
    client: Arc<C>,
    url: String,
}

impl<C: HttpClient + 'static> HttpFeedbackSink<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            client: Arc::new(client),
            url: format!("{}/feedback", base.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one record and wait for the response.
    pub async fn send(
        client: &C,
        url: &str,
        record: &FeedbackRecord,
    ) -> Result<(), FeedbackError> {
        let body = serde_json::to_string(record)?;
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = client.post(url, &body, &headers).await?;
        if !response.is_success() {
            return Err(FeedbackError::Status {
                status: response.status,
            });
        }
        Ok(())
    }
}

impl<C: HttpClient + 'static> FeedbackSink for HttpFeedbackSink<C> {
    fn record_feedback(&self, card_id: &str, direction: SwipeDirection) {
        let record = FeedbackRecord::new(card_id, direction, Utc::now());

        let Ok(handle) = Handle::try_current() else {
            warn!(card_id, "No async runtime; feedback dropped");
            return;
        };

        let client = Arc::clone(&self.client);
        let url = self.url.clone();
        handle.spawn(async move {
            match Self::send(&client, &url, &record).await {
                Ok(()) => debug!(
                    card_id = %record.card_id,
                    outcome = %record.outcome,
                    "Feedback recorded"
                ),
                Err(err) => warn!(
                    card_id = %record.card_id,
                    category = %err.category(),
                    "Feedback dropped: {}",
                    err
                ),
            }
        });
    }
}

/// Writes each decision to the log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedbackSink;

impl FeedbackSink for LogFeedbackSink {
    fn record_feedback(&self, card_id: &str, direction: SwipeDirection) {
        info!(card_id, outcome = %direction, "Swipe feedback");
    }
}
