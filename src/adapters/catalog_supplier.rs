//! Offline card supplier.
//!
//! Generates cards from a small built-in catalogue so the deck can be used
//! without a card service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::models::Card;
use crate::traits::CardSupplier;

struct CatalogEntry {
    title: &'static str,
    brand: &'static str,
    category: &'static str,
    price: f64,
    tags: &'static [&'static str],
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Trail Runner",
        brand: "Northpeak",
        category: "Shoes",
        price: 119.0,
        tags: &["outdoor", "running"],
    },
    CatalogEntry {
        title: "Canvas Tote",
        brand: "Fieldhouse",
        category: "Bags",
        price: 34.5,
        tags: &["everyday"],
    },
    CatalogEntry {
        title: "Merino Crew",
        brand: "Loftwool",
        category: "Knitwear",
        price: 89.0,
        tags: &["warm", "layering"],
    },
    CatalogEntry {
        title: "Rain Shell",
        brand: "Northpeak",
        category: "Outerwear",
        price: 149.99,
        tags: &["waterproof", "outdoor"],
    },
    CatalogEntry {
        title: "Linen Shirt",
        brand: "Saltmarsh",
        category: "Shirts",
        price: 59.0,
        tags: &["summer"],
    },
    CatalogEntry {
        title: "Leather Belt",
        brand: "Oxbow",
        category: "Accessories",
        price: 42.0,
        tags: &[],
    },
    CatalogEntry {
        title: "Wool Beanie",
        brand: "Loftwool",
        category: "Accessories",
        price: 24.0,
        tags: &["warm"],
    },
    CatalogEntry {
        title: "Chino Short",
        brand: "Saltmarsh",
        category: "Shorts",
        price: 49.5,
        tags: &["summer", "casual"],
    },
];

/// Supplier that never runs dry.
///
/// Every card gets a fresh uuid, so refills never collide with cards already
/// on the deck. Entries are handed out round-robin.
#[derive(Debug, Default)]
pub struct CatalogSupplier {
    cursor: AtomicUsize,
    latency: Option<Duration>,
}

impl CatalogSupplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay each fetch, to exercise the "fetching" state offline.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of entries in the built-in catalogue.
    pub fn catalog_len() -> usize {
        CATALOG.len()
    }

    fn next_card(&self) -> Card {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % CATALOG.len();
        let entry = &CATALOG[index];
        Card::new(Uuid::new_v4().to_string(), entry.title)
            .with_brand(entry.brand)
            .with_category(entry.category)
            .with_price(entry.price)
            .with_image_ref(format!("catalog/{}.png", index))
            .with_tags(entry.tags.iter().copied())
    }
}

#[async_trait]
impl CardSupplier for CatalogSupplier {
    async fn fetch_cards(&self, count: usize) -> Vec<Card> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let cards: Vec<Card> = (0..count).map(|_| self.next_card()).collect();
        debug!(count = cards.len(), "Generated catalog cards");
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_returns_requested_count() {
        let supplier = CatalogSupplier::new();
        assert_eq!(supplier.fetch_cards(3).await.len(), 3);
        assert!(supplier.fetch_cards(0).await.is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_wraparound() {
        let supplier = CatalogSupplier::new();
        let count = CatalogSupplier::catalog_len() * 2 + 1;
        let cards = supplier.fetch_cards(count).await;
        let ids: HashSet<_> = cards.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), count);
        assert_eq!(cards[0].title, cards[CatalogSupplier::catalog_len()].title);
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let supplier = CatalogSupplier::new().with_latency(Duration::from_millis(20));
        let start = std::time::Instant::now();
        let cards = supplier.fetch_cards(1).await;
        assert_eq!(cards.len(), 1);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
