use crate::core::{Pipe, branch::ExhaustMergePipe, source::IterSource};

#[test]
fn exhaust_merge_concatenates_in_order() {
  let upstreams = vec![IterSource::new(1_u32..3), IterSource::new(10_u32..12), IterSource::new(5_u32..5)];
  let mut pipe = ExhaustMergePipe::new(upstreams).expect("merge");
  assert_eq!(pipe.collect_values(), Ok(vec![1, 2, 10, 11]));

  pipe.reset();
  assert_eq!(pipe.try_next(), Ok(1));
}
