use crate::core::{Pipe, source::IterSource, transform::MapPipe};

#[test]
fn map_applies_function_lazily() {
  let mut calls = 0_usize;
  let mut pipe = MapPipe::new(IterSource::from_values(vec![1_u32, 2, 3]), |value: &u32| {
    calls += 1;
    value * 10
  });

  assert_eq!(pipe.try_next(), Ok(10));
  assert_eq!(pipe.collect_values(), Ok(vec![20, 30]));
  drop(pipe);
  assert_eq!(calls, 3);
}

#[test]
fn map_path_records_input_and_output() {
  let mut pipe = MapPipe::new(IterSource::single(2_u32), |value: &u32| format!("n{value}"));
  pipe.enable_path(true);

  assert_eq!(pipe.try_next(), Ok(String::from("n2")));
  let path = pipe.path().expect("path");
  assert_eq!(path.get::<u32>(0), Ok(&2));
  assert_eq!(path.back::<String>(0).map(String::as_str), Ok("n2"));
}
