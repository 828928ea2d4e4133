//! Card supplier and feedback sink against a real HTTP server, using wiremock.

mod common;

use std::time::Duration;

use common::{cards_json, MockHttpConfig};
use swipedeck::adapters::{HttpCardSupplier, HttpFeedbackSink, ReqwestHttpClient};
use swipedeck::error::{ErrorCategory, SupplierError};
use swipedeck::gesture::SwipeDirection;
use swipedeck::traits::{CardSupplier, FeedbackSink, HttpError};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_supplier_fetches_requested_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("count", "3"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(cards_json(&["c5", "c6", "c7"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let supplier = HttpCardSupplier::new(ReqwestHttpClient::new(), mock_server.uri());
    let cards = supplier.fetch_cards(3).await;

    let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c5", "c6", "c7"]);
    assert_eq!(cards[0].brand, "Oxbow");
    assert_eq!(cards[0].image_ref, "c5.png");
    assert_eq!(cards[0].tags, vec!["new"]);
}

#[tokio::test]
async fn test_supplier_accepts_wrapped_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cards": [
                {"id": 11, "title": "Hat", "price": 19.0, "image": "hat.png", "tags": null},
                {"id": "12", "title": "Scarf", "brand": null}
            ]
        })))
        .mount(&mock_server)
        .await;

    let supplier = HttpCardSupplier::new(ReqwestHttpClient::new(), mock_server.uri());
    let cards = supplier.fetch_cards(5).await;

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id, "11");
    assert_eq!(cards[0].image_ref, "hat.png");
    assert!(cards[0].tags.is_empty());
    assert_eq!(cards[1].brand, "");
}

#[tokio::test]
async fn test_supplier_server_error_yields_no_cards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let supplier = HttpCardSupplier::new(ReqwestHttpClient::new(), mock_server.uri());
    assert!(supplier.fetch_cards(3).await.is_empty());

    let err = supplier.try_fetch(3).await.unwrap_err();
    assert!(matches!(err, SupplierError::Status { status: 503, .. }));
    assert_eq!(err.category(), ErrorCategory::Server);
    assert!(err.to_string().contains("maintenance"));
}

#[tokio::test]
async fn test_supplier_unreachable_yields_no_cards() {
    let supplier = HttpCardSupplier::new(ReqwestHttpClient::new(), "http://127.0.0.1:59998");
    assert!(supplier.fetch_cards(2).await.is_empty());
}

#[tokio::test]
async fn test_supplier_with_mock_client_transport_error() {
    let client = MockHttpConfig::new()
        .with_transport_error(
            "http://cards.test/cards",
            HttpError::Timeout("10s".to_string()),
        )
        .build();
    let supplier = HttpCardSupplier::new(client, "http://cards.test");

    let err = supplier.try_fetch(1).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Network);
    assert!(err.category().is_retryable());
}

#[tokio::test]
async fn test_feedback_sink_posts_decision() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "cardId": "c1",
            "outcome": "right"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sink = HttpFeedbackSink::new(ReqwestHttpClient::new(), mock_server.uri());
    sink.record_feedback("c1", SwipeDirection::Right);

    // Fire-and-forget: poll until the background request lands.
    for _ in 0..100 {
        let received = mock_server.received_requests().await.unwrap_or_default();
        if !received.is_empty() {
            let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
            assert!(body["recordedAt"].as_str().unwrap().ends_with('Z'));
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("feedback request never arrived");
}

#[tokio::test]
async fn test_feedback_failure_is_swallowed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let sink = HttpFeedbackSink::new(ReqwestHttpClient::new(), mock_server.uri());
    sink.record_feedback("c1", SwipeDirection::Left);
    sink.record_feedback("c2", SwipeDirection::Right);

    for _ in 0..100 {
        if mock_server.received_requests().await.map(|r| r.len()) == Some(2) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("expected two feedback requests");
}
