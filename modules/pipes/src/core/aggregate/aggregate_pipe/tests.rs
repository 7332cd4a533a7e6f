use crate::core::{Pipe, aggregate::AggregatePipe, source::IterSource, transform::MapPipe};

#[test]
fn first_advance_drains_everything() {
  let mut pipe = AggregatePipe::new(IterSource::from_values(vec![1_u32, 2, 3]));
  assert_eq!(pipe.try_next(), Ok(1));
  assert_eq!(pipe.buffer().snapshot(), vec![1, 2, 3]);
  assert_eq!(pipe.collect_values(), Ok(vec![2, 3]));
}

#[test]
fn replayed_elements_keep_upstream_paths() {
  let mapped = MapPipe::new(IterSource::from_values(vec![1_u32, 2]), |value: &u32| value * 2);
  let mut pipe = AggregatePipe::new(mapped);
  pipe.enable_path(true);

  assert_eq!(pipe.try_next(), Ok(2));
  let path = pipe.path().expect("path");
  assert_eq!(path.len(), 2);
  assert_eq!(path.get::<u32>(0), Ok(&1));
}

#[test]
fn reset_keeps_collected_values() {
  let mut pipe = AggregatePipe::new(IterSource::from_values(vec!['a']));
  assert_eq!(pipe.collect_values(), Ok(vec!['a']));
  pipe.reset();
  assert_eq!(pipe.collect_values(), Ok(vec!['a']));
  assert_eq!(pipe.buffer().snapshot(), vec!['a', 'a']);
}
