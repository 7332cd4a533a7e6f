use crate::core::{
  Pipe,
  aggregate::{SideEffectBuffer, StorePipe},
  source::IterSource,
};

#[test]
fn store_collects_lazily() {
  let buffer = SideEffectBuffer::new();
  let mut pipe = StorePipe::new(IterSource::from_values(vec![5_u32, 6]), buffer.clone());

  assert!(buffer.is_empty());
  assert_eq!(pipe.try_next(), Ok(5));
  assert_eq!(buffer.snapshot(), vec![5]);
  assert_eq!(pipe.try_next(), Ok(6));
  assert_eq!(buffer.snapshot(), vec![5, 6]);
}
