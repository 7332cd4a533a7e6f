use crate::core::{Pipe, PipeError, branch::SyncBranch, source::IterSource};

#[test]
fn siblings_advance_in_lockstep() {
  let mut siblings = SyncBranch::split(IterSource::new(1_u32..=3), 2).expect("split");
  let (left, right) = siblings.split_at_mut(1);
  let (left, right) = (&mut left[0], &mut right[0]);

  assert_eq!(left.try_next(), Ok(1));
  assert_eq!(left.advance(), Err(PipeError::WouldBlock));
  assert_eq!(right.try_next(), Ok(1));
  assert_eq!(right.try_next(), Ok(2));
  assert_eq!(right.advance(), Err(PipeError::WouldBlock));
  assert_eq!(left.try_next(), Ok(2));
  assert_eq!(left.try_next(), Ok(3));
  assert_eq!(right.try_next(), Ok(3));
  assert_eq!(right.advance(), Ok(false));
  assert_eq!(left.advance(), Ok(false));
}

#[test]
fn single_sibling_never_waits() {
  let mut siblings = SyncBranch::split(IterSource::new(0_u32..3), 1).expect("split");
  assert_eq!(siblings[0].collect_values(), Ok(vec![0, 1, 2]));
}

#[test]
fn retry_after_would_block_succeeds() {
  let mut siblings = SyncBranch::split(IterSource::from_values(vec!['x', 'y']), 2).expect("split");
  assert_eq!(siblings[0].try_next(), Ok('x'));
  assert_eq!(siblings[0].try_next(), Err(PipeError::WouldBlock));
  assert_eq!(siblings[1].try_next(), Ok('x'));
  assert_eq!(siblings[0].try_next(), Ok('y'));
  assert_eq!(siblings[0].sibling(), 0);
}

#[test]
fn exhausted_siblings_follow_a_group_restart() {
  let mut siblings = SyncBranch::split(IterSource::from_values(vec![7_u32]), 2).expect("split");
  assert_eq!(siblings[0].try_next(), Ok(7));
  assert_eq!(siblings[1].try_next(), Ok(7));
  assert_eq!(siblings[0].advance(), Ok(false));
  assert_eq!(siblings[1].advance(), Ok(false));

  siblings[1].reset();
  siblings[0].reset();
  assert_eq!(siblings[0].try_next(), Ok(7));
  assert_eq!(siblings[1].try_next(), Ok(7));
  assert_eq!(siblings[1].advance(), Ok(false));
}
