//! Card supplier backed by a remote card service.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::SupplierError;
use crate::models::Card;
use crate::traits::{CardSupplier, Headers, HttpClient};

/// Wire shapes accepted from `GET {base}/cards`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CardsPayload {
    Bare(Vec<Card>),
    Wrapped { cards: Vec<Card> },
}

impl CardsPayload {
    fn into_cards(self) -> Vec<Card> {
        match self {
            CardsPayload::Bare(cards) | CardsPayload::Wrapped { cards } => cards,
        }
    }
}

/// Fetches cards with `GET {base_url}/cards?count=N`.
///
/// The response may be a bare JSON array or an object with a `cards` array.
/// Failures are logged and reported to the deck as an empty batch.
#[derive(Debug, Clone)]
pub struct HttpCardSupplier<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> HttpCardSupplier<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn cards_url(&self, count: usize) -> String {
        format!("{}/cards?count={}", self.base_url, count)
    }

    /// Fetch cards, surfacing the failure instead of swallowing it.
    pub async fn try_fetch(&self, count: usize) -> Result<Vec<Card>, SupplierError> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.client.get(&self.cards_url(count), &headers).await?;
        if !response.is_success() {
            return Err(SupplierError::Status {
                status: response.status,
                message: response.text_lossy(),
            });
        }

        let mut cards = response.json::<CardsPayload>()?.into_cards();
        cards.truncate(count);
        Ok(cards)
    }
}

#[async_trait]
impl<C: HttpClient> CardSupplier for HttpCardSupplier<C> {
    async fn fetch_cards(&self, count: usize) -> Vec<Card> {
        match self.try_fetch(count).await {
            Ok(cards) => {
                debug!(requested = count, received = cards.len(), "Fetched cards");
                cards
            }
            Err(err) => {
                warn!(
                    code = err.error_code(),
                    category = %err.category(),
                    "Card fetch failed: {}",
                    err
                );
                Vec::new()
            }
        }
    }
}
