use std::sync::{Arc, Mutex};

use weft_pipes_rs::{
  core::{
    Pipeline,
    arrow::{Arrow, ArrowEvent, CombineArrow, CombineArrowConfig},
  },
  std::ConcurrentCombineArrow,
};

fn combined(number: u32, text: &'static str) -> String {
  format!("{text}{number}")
}

#[test]
fn combine_pairs_alternating_arrivals() {
  let combine = CombineArrow::new(combined);
  let outputs = Arc::new(Mutex::new(Vec::new()));
  let sink = outputs.clone();
  combine.subscribe(None, move |event| {
    if let ArrowEvent::Message { payload, .. } = event {
      sink.lock().expect("lock").push(payload.clone());
    }
    Ok(())
  });

  for (number, text) in [(1, "a"), (2, "b"), (3, "c")] {
    combine.receive_left(None, number);
    combine.receive_right(None, text);
  }

  assert_eq!(*outputs.lock().expect("lock"), ["a1", "b2", "c3"]);
}

#[test]
fn concurrent_combine_pairs_arrows_fed_from_pipes() {
  let numbers = Arrow::<u32, u32>::identity();
  let letters = Arrow::<&'static str, &'static str>::identity();
  let combine = ConcurrentCombineArrow::spawn(combined, &CombineArrowConfig::default()).expect("spawn");
  combine.attach_left(&numbers);
  combine.attach_right(&letters);

  let outputs = Arc::new(Mutex::new(Vec::new()));
  let sink = outputs.clone();
  combine.subscribe(None, move |event| {
    if let ArrowEvent::Message { payload, .. } = event {
      sink.lock().expect("lock").push(payload.clone());
    }
    Ok(())
  });

  let mut number_source = Pipeline::from_values(vec![1_u32, 2, 3]);
  let mut letter_source = Pipeline::from_values(vec!["a", "b", "c"]);
  assert_eq!(numbers.feed_from(&mut number_source), Ok(3));
  assert_eq!(letters.feed_from(&mut letter_source), Ok(3));
  combine.close().expect("close");

  assert_eq!(*outputs.lock().expect("lock"), ["a1", "b2", "c3"]);
  assert!(combine.is_completed());
}
