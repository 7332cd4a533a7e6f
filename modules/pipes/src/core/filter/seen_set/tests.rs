use crate::core::filter::SeenSet;

#[test]
fn insert_reports_first_occurrence_only() {
  let mut seen = SeenSet::new();
  assert!(seen.insert("a"));
  assert!(!seen.insert("a"));
  assert!(seen.contains(&"a"));
  assert_eq!(seen.len(), 1);

  seen.clear();
  assert!(seen.is_empty());
}
