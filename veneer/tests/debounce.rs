//! Tests for debounced execution (paused tokio clock).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use veneer::debounce::Debouncer;
use veneer::element::Element;
use veneer::enhancer::Enhancer;
use veneer::event::UiEvent;
use veneer::geometry::Rect;

#[tokio::test(start_paused = true)]
async fn a_single_trigger_fires_after_the_quiet_period() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    let fired = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&fired);
    debouncer.trigger(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn intermediate_triggers_are_discarded() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    let fired = Arc::new(AtomicUsize::new(0));

    for _ in 0..3 {
        let counter = Arc::clone(&fired);
        debouncer.trigger(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1, "only the final trigger runs");
}

#[tokio::test(start_paused = true)]
async fn cancel_discards_the_pending_trigger() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    let fired = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&fired);
    debouncer.trigger(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    debouncer.cancel();

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn searchable_input_reaches_the_handler_once_settled() {
    let enhancer = Enhancer::new(Rect::from_size(80, 24));
    enhancer.register(Element::new("employee-search").searchable());

    let queries: Arc<std::sync::Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&queries);
    enhancer.on_search("employee-search", move |q| {
        if let Ok(mut seen) = sink.lock() {
            seen.push(q);
        }
    });

    for value in ["j", "ja", "jane"] {
        enhancer.dispatch(&UiEvent::InputChanged {
            target: "employee-search".into(),
            value: value.into(),
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    tokio::time::sleep(Duration::from_millis(500)).await;
    let seen = queries.lock().expect("queries");
    assert_eq!(*seen, vec!["jane".to_string()], "only the final query runs");
}
