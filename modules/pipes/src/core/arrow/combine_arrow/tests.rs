use alloc::{format, string::String, sync::Arc};
use std::sync::Mutex;

use crate::core::arrow::{Arrow, ArrowChannel, ArrowError, ArrowEvent, CombineArrow, CombineArrowConfig};

fn record<L, R>(combine: &CombineArrow<L, R, String>) -> Arc<Mutex<Vec<ArrowEvent<String>>>>
where
  L: crate::core::PipeElement,
  R: crate::core::PipeElement, {
  let events = Arc::new(Mutex::new(Vec::new()));
  let sink = events.clone();
  combine.subscribe(None, move |event: &ArrowEvent<String>| {
    sink.lock().expect("lock").push(event.clone());
    Ok(())
  });
  events
}

fn messages(events: &Arc<Mutex<Vec<ArrowEvent<String>>>>) -> Vec<String> {
  events
    .lock()
    .expect("lock")
    .iter()
    .filter_map(|event| match event {
      | ArrowEvent::Message { payload, .. } => Some(payload.clone()),
      | _ => None,
    })
    .collect()
}

#[test]
fn alternating_arrivals_pair_in_order() {
  let combine = CombineArrow::new(|number: u32, text: &'static str| format!("{text}{number}"));
  let events = record(&combine);

  for (number, text) in [(1, "a"), (2, "b"), (3, "c")] {
    assert!(combine.receive_left(None, number));
    assert!(combine.receive_right(None, text));
  }
  assert_eq!(messages(&events), vec!["a1", "b2", "c3"]);
}

#[test]
fn bursts_are_paired_per_input_order() {
  let combine = CombineArrow::new(|number: u32, text: &'static str| format!("{text}{number}"));
  let events = record(&combine);

  combine.receive_left(None, 1);
  combine.receive_left(None, 2);
  assert_eq!(combine.pending_left(), 2);
  combine.receive_right(None, "a");
  combine.receive_right(None, "b");
  combine.receive_right(None, "c");
  assert_eq!(combine.pending_right(), 1);
  combine.receive_left(None, 3);

  assert_eq!(messages(&events), vec!["a1", "b2", "c3"]);
  assert_eq!((combine.pending_left(), combine.pending_right()), (0, 0));
}

#[test]
fn overflow_is_reported_as_buffer_full() {
  let config = CombineArrowConfig::default().with_queue_capacity(1);
  let combine = CombineArrow::with_config(|left: u8, right: u8| format!("{left}{right}"), &config).expect("combine");
  let events = record(&combine);

  assert!(combine.receive_left(None, 1));
  assert!(!combine.receive_left(None, 2));
  assert_eq!(combine.pending_left(), 1);
  let errors: Vec<_> = events.lock().expect("lock").iter().map(ArrowEvent::channel).collect();
  assert_eq!(errors, vec![ArrowChannel::Error]);
  assert!(matches!(events.lock().expect("lock")[0], ArrowEvent::Failed { error: ArrowError::BufferFull { capacity: 1 }, .. }));
}

#[test]
fn zero_capacity_is_rejected() {
  let config = CombineArrowConfig::new(0);
  assert!(CombineArrow::with_config(|left: u8, right: u8| format!("{left}{right}"), &config).is_err());
}

#[test]
fn completes_once_both_inputs_completed() {
  let combine = CombineArrow::new(|left: u8, right: u8| format!("{left}{right}"));
  let events = record(&combine);

  combine.complete_left();
  assert!(!combine.is_completed());
  combine.complete_right();
  assert!(combine.is_completed());
  assert!(!combine.receive_left(None, 1));
  let channels: Vec<_> = events.lock().expect("lock").iter().map(ArrowEvent::channel).collect();
  assert_eq!(channels, vec![ArrowChannel::Completion, ArrowChannel::Error]);
}

#[test]
fn attached_arrows_drive_both_inputs() {
  let numbers = Arrow::<u32, u32>::identity();
  let letters = Arrow::map(|text: String| text.to_uppercase());
  let combine = CombineArrow::new(|number: u32, text: String| format!("{text}{number}"));
  combine.attach_left(&numbers);
  combine.attach_right(&letters);
  let tail = Arrow::<String, String>::identity();
  combine.connect(&tail);
  let seen = Arc::new(Mutex::new(Vec::new()));
  let sink = seen.clone();
  tail.on_message(move |sender, payload: &String| {
    sink.lock().expect("lock").push((sender, payload.clone()));
    Ok(())
  });

  letters.push(String::from("x"));
  numbers.push(7);
  numbers.complete();
  letters.complete();

  assert_eq!(*seen.lock().expect("lock"), vec![(numbers.id(), String::from("X7"))]);
  assert!(tail.is_completed());
}
