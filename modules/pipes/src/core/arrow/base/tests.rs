use alloc::{string::String, sync::Arc};
use std::sync::Mutex;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::{
  Pipeline,
  aggregate::SideEffectBuffer,
  arrow::{Arrow, ArrowChannel, ArrowError, ArrowEvent, ArrowId, ArrowLogic, ArrowStep},
  filter::Band,
};

type Log<T> = Arc<Mutex<Vec<T>>>;

fn collect_messages<In, Out>(arrow: &Arrow<In, Out>) -> Log<(ArrowId, Out)>
where
  In: crate::core::PipeElement,
  Out: crate::core::PipeElement, {
  let log: Log<(ArrowId, Out)> = Arc::new(Mutex::new(Vec::new()));
  let sink = log.clone();
  arrow.on_message(move |sender, payload| {
    sink.lock().expect("lock").push((sender, payload.clone()));
    Ok(())
  });
  log
}

fn collect_errors<In, Out>(arrow: &Arrow<In, Out>) -> Log<ArrowError>
where
  In: crate::core::PipeElement,
  Out: crate::core::PipeElement, {
  let log: Log<ArrowError> = Arc::new(Mutex::new(Vec::new()));
  let sink = log.clone();
  arrow.on_error(move |_sender, error| {
    sink.lock().expect("lock").push(error.clone());
    Ok(())
  });
  log
}

fn payloads<T: Clone>(log: &Log<(ArrowId, T)>) -> Vec<T> {
  log.lock().expect("lock").iter().map(|(_, payload)| payload.clone()).collect()
}

#[test]
fn map_delivers_in_subscription_order_with_own_id() {
  let arrow = Arrow::map(|value: u32| value * 2);
  let order = Arc::new(Mutex::new(Vec::new()));
  for name in ["first", "second"] {
    let order = order.clone();
    arrow.on_message(move |_sender, _payload: &u32| {
      order.lock().expect("lock").push(name);
      Ok(())
    });
  }
  let messages = collect_messages(&arrow);

  assert!(arrow.push(4));
  assert_eq!(*order.lock().expect("lock"), vec!["first", "second"]);
  assert_eq!(*messages.lock().expect("lock"), vec![(arrow.id(), 8)]);
}

#[test]
fn explicit_sender_is_propagated() {
  let arrow = Arrow::<u8, u8>::identity();
  let messages = collect_messages(&arrow);
  let origin = ArrowId::new(99);

  assert!(arrow.receive_message(Some(origin), 1));
  assert_eq!(messages.lock().expect("lock")[0].0, origin);
}

#[test]
fn processing_failures_go_to_the_error_channel() {
  let arrow = Arrow::try_map(|text: String| text.parse::<u32>().map_err(ArrowError::processing));
  let messages = collect_messages(&arrow);
  let errors = collect_errors(&arrow);

  assert!(arrow.push(String::from("12")));
  assert!(!arrow.push(String::from("twelve")));
  assert_eq!(payloads(&messages), vec![12]);
  assert_eq!(errors.lock().expect("lock").len(), 1);
}

#[test]
fn observer_failures_are_reported_and_delivery_continues() {
  let arrow = Arrow::<u32, u32>::identity();
  arrow.on_message(|_sender, _payload| Err(ArrowError::delivery("rejected")));
  let messages = collect_messages(&arrow);
  let errors = collect_errors(&arrow);

  assert!(!arrow.push(1));
  assert_eq!(payloads(&messages), vec![1]);
  assert_eq!(*errors.lock().expect("lock"), vec![ArrowError::delivery("rejected")]);
}

#[test]
fn completion_is_signalled_once_and_later_messages_fail() {
  let arrow = Arrow::<u32, u32>::identity();
  let completions = Arc::new(Mutex::new(0_usize));
  let counter = completions.clone();
  arrow.on_completed(move |_sender| {
    *counter.lock().expect("lock") += 1;
    Ok(())
  });
  let errors = collect_errors(&arrow);

  arrow.complete();
  arrow.complete();
  assert!(arrow.is_completed());
  assert!(!arrow.push(1));
  assert_eq!(*completions.lock().expect("lock"), 1);
  assert_eq!(*errors.lock().expect("lock"), vec![ArrowError::Completed]);
}

#[test]
fn completion_failures_are_funnelled() {
  struct FailingCompletion;

  impl ArrowLogic<u32, u32> for FailingCompletion {
    fn process(&mut self, message: u32) -> Result<ArrowStep<u32>, ArrowError> {
      Ok(ArrowStep::Forward(message))
    }

    fn on_complete(&mut self) -> Result<(), ArrowError> {
      Err(ArrowError::processing("flush failed"))
    }
  }

  let arrow = Arrow::from_logic(FailingCompletion);
  let errors = collect_errors(&arrow);
  arrow.complete();
  assert!(arrow.is_completed());
  assert_eq!(*errors.lock().expect("lock"), vec![ArrowError::processing("flush failed")]);
}

#[test]
fn unsubscribe_stops_delivery() {
  let arrow = Arrow::<u32, u32>::identity();
  let seen = Arc::new(Mutex::new(0_usize));
  let counter = seen.clone();
  let id = arrow.on_message(move |_sender, _payload| {
    *counter.lock().expect("lock") += 1;
    Ok(())
  });

  arrow.push(1);
  assert!(arrow.unsubscribe(id));
  arrow.push(2);
  assert_eq!(*seen.lock().expect("lock"), 1);
}

#[test]
fn connected_vocabulary_matches_pull_semantics() {
  let buffer = SideEffectBuffer::new();
  let skip = Arrow::<u32, u32>::skip(2);
  let band = Arrow::band(Band::new(3_u32, 5).expect("band"));
  let dedup = Arrow::<u32, u32>::dedup();
  let store = Arrow::store(buffer.clone());
  skip.connect(&band);
  band.connect(&dedup);
  dedup.connect(&store);
  let completed = Arc::new(Mutex::new(false));
  let flag = completed.clone();
  store.on_completed(move |_sender| {
    *flag.lock().expect("lock") = true;
    Ok(())
  });

  for value in [1, 2, 3, 4, 4, 5, 6] {
    skip.push(value);
  }
  skip.complete();
  assert_eq!(buffer.snapshot(), vec![3, 4, 5]);
  assert!(*completed.lock().expect("lock"));
}

#[test]
fn connected_messages_keep_the_origin_sender() {
  let head = Arrow::<u32, u32>::identity();
  let tail = Arrow::filter(|value: &u32| value % 2 == 0);
  head.connect(&tail);
  let messages = collect_messages(&tail);

  head.push(1);
  head.push(2);
  assert_eq!(*messages.lock().expect("lock"), vec![(head.id(), 2)]);
}

#[test]
fn side_effect_and_random_filter_forward_messages() {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let sink = seen.clone();
  let effect = Arrow::side_effect(move |value: &char| sink.lock().expect("lock").push(*value));
  let keep_all = Arrow::random_filter(1.0, ChaCha8Rng::seed_from_u64(5)).expect("random");
  effect.connect(&keep_all);
  let messages = collect_messages(&keep_all);

  effect.push('a');
  effect.push('b');
  assert_eq!(*seen.lock().expect("lock"), vec!['a', 'b']);
  assert_eq!(payloads(&messages), vec!['a', 'b']);
  assert!(Arrow::<char, char>::random_filter(-0.1, ChaCha8Rng::seed_from_u64(5)).is_err());
}

#[test]
fn feed_from_bridges_a_pull_pipeline() {
  let arrow = Arrow::map(|value: u32| value + 100);
  let messages = collect_messages(&arrow);
  let mut pipeline = Pipeline::from_values(vec![1_u32, 2, 3]).filter(|value: &u32| *value != 2);

  assert_eq!(arrow.feed_from(&mut pipeline), Ok(2));
  assert_eq!(payloads(&messages), vec![101, 103]);
  assert!(arrow.is_completed());
}

#[test]
fn observers_listening_to_all_channels_see_every_event() {
  let arrow = Arrow::<u32, u32>::identity();
  let channels = Arc::new(Mutex::new(Vec::new()));
  let sink = channels.clone();
  arrow.subscribe(None, move |event: &ArrowEvent<u32>| {
    sink.lock().expect("lock").push(event.channel());
    Ok(())
  });

  arrow.push(1);
  arrow.complete();
  arrow.push(2);
  assert_eq!(*channels.lock().expect("lock"), vec![
    ArrowChannel::Message,
    ArrowChannel::Completion,
    ArrowChannel::Error
  ]);
}
