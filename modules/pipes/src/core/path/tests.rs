use crate::core::{Path, PipeError};

#[test]
fn extended_keeps_the_original_snapshot() {
  let root = Path::root(1_u32);
  let next = root.extended("one");

  assert_eq!(root.len(), 1);
  assert_eq!(next.len(), 2);
  assert_eq!(next.get::<u32>(0), Ok(&1));
  assert_eq!(next.get::<&str>(1), Ok(&"one"));
}

#[test]
fn back_counts_from_the_current_value() {
  let path = Path::root(1_u32).extended(2_u32).extended(3_u32);

  assert_eq!(path.back::<u32>(0), Ok(&3));
  assert_eq!(path.back::<u32>(2), Ok(&1));
  assert_eq!(path.back::<u32>(3), Err(PipeError::NoSuchElement));
  assert!(path.reaches_back(2));
  assert!(!path.reaches_back(3));
}

#[test]
fn typed_lookup_reports_mismatch() {
  let path = Path::root(7_i64);
  assert_eq!(path.get::<u32>(0), Err(PipeError::TypeMismatch));
  assert_eq!(path.get::<i64>(1), Err(PipeError::NoSuchElement));
}

#[test]
fn extend_or_root_starts_a_path_without_base() {
  let path = Path::extend_or_root(None, 5_u8);
  assert_eq!(path.len(), 1);
  assert_eq!(format!("{path:?}"), "Path { len: 1 }");
}
