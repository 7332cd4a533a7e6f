use crate::core::{Pipe, filter::FilterPipe, source::IterSource, transform::MapPipe};

#[test]
fn filter_keeps_order_of_matching_elements() {
  let mut pipe = FilterPipe::new(IterSource::new(1_u32..=10), |value: &u32| value % 3 == 0);
  assert_eq!(pipe.collect_values(), Ok(vec![3, 6, 9]));
  assert_eq!(pipe.advance(), Ok(false));
}

#[test]
fn filter_reexposes_upstream_path() {
  let mapped = MapPipe::new(IterSource::from_values(vec![1_u32, 2]), |value: &u32| value + 1);
  let mut pipe = FilterPipe::new(mapped, |value: &u32| *value > 2);
  pipe.enable_path(true);

  assert_eq!(pipe.try_next(), Ok(3));
  let path = pipe.path().expect("path");
  assert_eq!(path.len(), 2);
  assert_eq!(path.get::<u32>(0), Ok(&2));
}
