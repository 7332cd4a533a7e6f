use crate::core::{Pipe, PipeError, backtrack::BackPipe, source::IterSource, transform::MapPipe};

fn names() -> MapPipe<IterSource<std::vec::IntoIter<u32>>, impl FnMut(&u32) -> String + Send, String> {
  MapPipe::new(IterSource::from_values(vec![1_u32, 2, 3]), |id: &u32| format!("v{id}"))
}

#[test]
fn one_step_back_recovers_the_producing_element() {
  let mut pipe = BackPipe::<_, u32>::new(names(), 1);
  assert_eq!(pipe.collect_values(), Ok(vec![1, 2, 3]));
}

#[test]
fn backtracked_value_extends_the_path() {
  let mut pipe = BackPipe::<_, u32>::new(names(), 1);
  pipe.enable_path(true);
  assert_eq!(pipe.try_next(), Ok(1));
  assert_eq!(pipe.path().map(|path| path.len()), Some(3));
}

#[test]
fn depth_past_the_path_fails() {
  let mut pipe = BackPipe::<_, u32>::new(names(), 2);
  assert_eq!(pipe.advance(), Err(PipeError::NoSuchElement));
}

#[test]
fn wrong_recorded_type_fails() {
  let mut pipe = BackPipe::<_, u64>::new(names(), 1);
  assert_eq!(pipe.advance(), Err(PipeError::TypeMismatch));
}
