use crate::core::{Pipe, PipeDslError, source::IterSource, window::HasCountPipe};

fn has_count(len: u32) -> bool {
  let mut pipe = HasCountPipe::new(IterSource::new(0..len), Some(2), Some(4)).expect("pipe");
  let answer = pipe.try_next().expect("answer");
  assert_eq!(pipe.advance(), Ok(false));
  answer
}

#[test]
fn count_inside_bounds_is_true() {
  assert!(has_count(3));
  assert!(has_count(2));
  assert!(has_count(4));
}

#[test]
fn count_outside_bounds_is_false() {
  assert!(!has_count(1));
  assert!(!has_count(5));
}

#[test]
fn exceeding_max_does_not_drain_upstream() {
  let mut pipe = HasCountPipe::new(IterSource::new(0_u64..), Some(2), Some(4)).expect("pipe");
  assert_eq!(pipe.try_next(), Ok(false));
  assert_eq!(pipe.counted(), 5);
}

#[test]
fn open_max_answers_once_min_is_reached() {
  let mut pipe = HasCountPipe::new(IterSource::new(0_u64..), Some(3), None).expect("pipe");
  assert_eq!(pipe.try_next(), Ok(true));
  assert_eq!(pipe.counted(), 3);
}

#[test]
fn reset_recounts() {
  let mut pipe = HasCountPipe::new(IterSource::from_values(vec!['x']), None, Some(0)).expect("pipe");
  assert_eq!(pipe.try_next(), Ok(false));
  pipe.reset();
  assert_eq!(pipe.try_next(), Ok(false));
}

#[test]
fn inverted_bounds_are_rejected() {
  let result = HasCountPipe::new(IterSource::new(0_u32..1), Some(3), Some(1));
  assert_eq!(result.err(), Some(PipeDslError::invalid_argument("min", "must not exceed max")));
}
