use crate::core::arrow::ArrowId;

#[test]
fn next_is_monotonic() {
  let first = ArrowId::next();
  let second = ArrowId::next();
  assert!(second > first);
  assert_eq!(ArrowId::new(7).to_string(), "arrow-7");
  assert_eq!(ArrowId::new(7).value(), 7);
}
