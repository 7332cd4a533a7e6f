use crate::core::{Pipe, source::IterSource, transform::IdentityPipe};

#[test]
fn identity_adds_one_path_entry() {
  let mut pipe = IdentityPipe::new(IterSource::from_values(vec!['a', 'b']));
  pipe.enable_path(true);

  assert_eq!(pipe.try_next(), Ok('a'));
  assert_eq!(pipe.path().map(|path| path.len()), Some(2));
  assert_eq!(pipe.collect_values(), Ok(vec!['b']));
}
