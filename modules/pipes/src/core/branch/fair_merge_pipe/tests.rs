use crate::core::{Pipe, PipeDslError, PipeError, branch::FairMergePipe, source::IterSource};

#[test]
fn merge_cycles_and_skips_exhausted_upstreams() {
  let upstreams = vec![
    IterSource::from_values(vec!["a1", "a2"]),
    IterSource::from_values(vec!["b1"]),
    IterSource::from_values(vec!["c1", "c2", "c3"]),
  ];
  let mut pipe = FairMergePipe::new(upstreams).expect("merge");
  assert_eq!(pipe.collect_values(), Ok(vec!["a1", "b1", "c1", "a2", "c2", "c3"]));
}

#[test]
fn empty_rotation_exhausts_the_merge() {
  let mut pipe = FairMergePipe::new(vec![IterSource::from_values(Vec::<u32>::new())]).expect("merge");
  assert_eq!(pipe.advance(), Ok(false));
  assert_eq!(pipe.try_next(), Err(PipeError::NoSuchElement));
}

#[test]
fn merge_without_upstreams_is_rejected() {
  let result = FairMergePipe::<IterSource<std::vec::IntoIter<u32>>>::new(Vec::new());
  assert_eq!(result.err(), Some(PipeDslError::invalid_argument("upstreams", "must not be empty")));
}
