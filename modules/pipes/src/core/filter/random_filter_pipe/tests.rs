use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::{Pipe, PipeDslError, filter::RandomFilterPipe, source::IterSource};

#[test]
fn bias_outside_unit_interval_is_rejected() {
  let source = IterSource::from_values(vec![1_u32]);
  let result = RandomFilterPipe::new(source, 1.5, ChaCha8Rng::seed_from_u64(1));
  assert_eq!(result.err(), Some(PipeDslError::invalid_argument("bias", "must be within [0, 1]")));
}

#[test]
fn extreme_biases_keep_everything_or_nothing() {
  let mut all = RandomFilterPipe::new(IterSource::new(0_u32..50), 1.0, ChaCha8Rng::seed_from_u64(7)).expect("all");
  assert_eq!(all.collect_values().expect("values").len(), 50);

  let mut none = RandomFilterPipe::new(IterSource::new(0_u32..50), 0.0, ChaCha8Rng::seed_from_u64(7)).expect("none");
  assert_eq!(none.collect_values(), Ok(Vec::new()));
}

#[test]
fn sampled_output_is_an_ordered_subsequence() {
  let mut pipe = RandomFilterPipe::new(IterSource::new(0_u32..1000), 0.3, ChaCha8Rng::seed_from_u64(42)).expect("pipe");
  let kept = pipe.collect_values().expect("values");

  assert!(kept.windows(2).all(|pair| pair[0] < pair[1]));
  assert!(kept.len() > 200 && kept.len() < 400);
}
