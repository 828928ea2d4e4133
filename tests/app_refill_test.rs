//! Async refill and teardown behavior of the App shell.

mod common;

use std::time::{Duration, Instant};

use common::{after_exit, cards, queue_ids, stack_ids, TestAppBuilder};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use swipedeck::app::AppMessage;
use swipedeck::gesture::SwipeDirection;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn test_save_then_refill_round_trip() {
    let mut t = TestAppBuilder::new()
        .with_cards(&["c1", "c2", "c3", "c4"])
        .build();
    t.supplier.push_batch(cards(&["c5", "c6", "c7"]));
    t.app.mount();
    assert!(!t.app.is_fetching());

    let start = Instant::now();
    t.app.handle_key(key(KeyCode::Right), start);
    assert_eq!(
        t.feedback.records(),
        vec![("c1".to_string(), SwipeDirection::Right)]
    );

    t.app.tick(after_exit(start));
    assert!(t.app.is_fetching());
    t.pump().await;

    assert_eq!(t.supplier.requests(), vec![3]);
    assert_eq!(
        stack_ids(&t.app.deck),
        vec!["c2", "c3", "c4", "c5", "c6", "c7"]
    );
    assert_eq!(queue_ids(&t.app.deck), vec!["c1"]);
    assert!(!t.app.is_fetching());
}

#[tokio::test]
async fn test_input_stays_live_while_fetching() {
    let mut t = TestAppBuilder::new().with_cards(&["c1", "c2"]).build();
    t.supplier.close_gate();
    t.supplier.push_batch(cards(&["c3", "c4", "c5", "c6"]));
    t.app.mount();
    assert!(t.app.is_fetching());

    let start = Instant::now();
    t.app.handle_key(key(KeyCode::Left), start);
    t.app.tick(after_exit(start));
    assert_eq!(stack_ids(&t.app.deck), vec!["c2"]);

    // Depth changed again, so a second request goes out while the first is held.
    assert_eq!(t.app.in_flight_count(), 2);

    t.supplier.open_gate();
    t.pump().await;
    t.pump().await;

    assert_eq!(t.supplier.requests(), vec![4, 5]);
    assert_eq!(stack_ids(&t.app.deck), vec!["c2", "c3", "c4", "c5", "c6"]);
    assert!(!t.app.is_fetching());
}

#[tokio::test]
async fn test_empty_result_waits_for_next_trigger() {
    let mut t = TestAppBuilder::new()
        .with_cards(&["c1", "c2", "c3", "c4"])
        .build();
    t.app.mount();

    let start = Instant::now();
    t.app.handle_key(key(KeyCode::Char('h')), start);
    t.app.tick(after_exit(start));
    t.pump().await;
    assert_eq!(t.supplier.requests(), vec![3]);

    // Nothing new until the depth changes or the user asks.
    t.app.tick(after_exit(start) + Duration::from_millis(50));
    assert!(!t.app.is_fetching());

    t.app.handle_key(key(KeyCode::Char('r')), after_exit(start));
    t.pump().await;
    assert_eq!(t.supplier.requests(), vec![3, 3]);
}

#[tokio::test]
async fn test_late_results_after_shutdown_are_discarded() {
    let mut t = TestAppBuilder::new().with_cards(&["c1"]).build();
    t.supplier.close_gate();
    t.supplier.push_batch(cards(&["late1", "late2"]));
    t.app.mount();
    assert!(t.app.is_fetching());

    t.app.shutdown();
    t.supplier.open_gate();

    // The task sees the cleared flag and never reports back.
    let nothing = tokio::time::timeout(Duration::from_millis(100), t.app.next_message()).await;
    assert!(nothing.is_err(), "no message expected after shutdown");

    // A result already queued before teardown is ignored as well.
    t.app.handle_message(AppMessage::CardsFetched {
        request_id: 0,
        cards: cards(&["late3"]),
    });
    assert_eq!(stack_ids(&t.app.deck), vec!["c1"]);
}

#[tokio::test]
async fn test_quit_key_tears_down() {
    let mut t = TestAppBuilder::new().with_cards(&["c1"]).build();
    t.app.handle_key(key(KeyCode::Char('q')), Instant::now());
    assert!(t.app.should_quit);
    assert!(!t.app.is_alive());
}
