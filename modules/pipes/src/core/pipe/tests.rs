use alloc::boxed::Box;

use crate::core::{Pipe, PipeError, StageKind, source::IterSource, transform::MapPipe};

#[test]
fn boxed_pipes_delegate_to_the_inner_stage() {
  let mut boxed: Box<dyn Pipe<Item = u32>> =
    Box::new(MapPipe::new(IterSource::from_values(vec![1_u32, 2]), |value: &u32| value + 1));
  assert_eq!(boxed.kind(), StageKind::Transform);
  assert_eq!(boxed.collect_values(), Ok(vec![2, 3]));
  assert_eq!(boxed.try_next(), Err(PipeError::NoSuchElement));
}

#[test]
fn iter_stops_after_the_first_error() {
  let mut pipe = crate::core::backtrack::BackPipe::<_, u64>::new(IterSource::from_values(vec![1_u32, 2]), 0);
  let results: Vec<_> = pipe.iter().collect();
  assert_eq!(results, vec![Err(PipeError::TypeMismatch)]);
}

#[test]
fn iter_yields_until_exhaustion() {
  let mut source = IterSource::new(0_u8..3);
  let sum: u32 = source.iter().map(|value| u32::from(value.expect("value"))).sum();
  assert_eq!(sum, 3);
}
