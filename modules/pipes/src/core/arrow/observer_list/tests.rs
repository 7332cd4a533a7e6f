use alloc::sync::Arc;
use std::sync::Mutex;

use crate::core::arrow::{ArrowChannel, ArrowEvent, ArrowId, ArrowObserver, ObserverList};

fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> ArrowObserver<u32> {
  let log = log.clone();
  Arc::new(move |_event: &ArrowEvent<u32>| {
    log.lock().expect("lock").push(name);
    Ok(())
  })
}

#[test]
fn snapshot_keeps_subscription_order_and_filters_channels() {
  let log = Arc::new(Mutex::new(Vec::new()));
  let mut list = ObserverList::new();
  list.subscribe(Some(ArrowChannel::Message), recorder(&log, "first"));
  list.subscribe(Some(ArrowChannel::Error), recorder(&log, "errors"));
  list.subscribe(None, recorder(&log, "all"));

  let event = ArrowEvent::Message { sender: ArrowId::new(1), payload: 5 };
  for observer in list.snapshot(ArrowChannel::Message) {
    observer(&event).expect("deliver");
  }
  assert_eq!(*log.lock().expect("lock"), vec!["first", "all"]);
  assert_eq!(list.snapshot(ArrowChannel::Completion).len(), 1);
}

#[test]
fn unsubscribe_preserves_remaining_order() {
  let log = Arc::new(Mutex::new(Vec::new()));
  let mut list = ObserverList::new();
  let first = list.subscribe(None, recorder(&log, "first"));
  list.subscribe(None, recorder(&log, "second"));
  list.subscribe(None, recorder(&log, "third"));

  assert!(list.unsubscribe(first));
  assert!(!list.unsubscribe(first));
  let event = ArrowEvent::Completed { sender: ArrowId::new(1) };
  for observer in list.snapshot(ArrowChannel::Completion) {
    observer(&event).expect("deliver");
  }
  assert_eq!(*log.lock().expect("lock"), vec!["second", "third"]);
  assert_eq!(list.len(), 2);
}
