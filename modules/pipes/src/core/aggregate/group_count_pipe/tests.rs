use crate::core::{
  Pipe,
  aggregate::{GroupCountPipe, GroupCountTable},
  source::IterSource,
};

#[test]
fn group_count_passes_elements_through() {
  let table = GroupCountTable::new();
  let words = vec!["ab", "cd", "a", "xyz", "ef"];
  let mut pipe = GroupCountPipe::new(IterSource::from_values(words.clone()), table.clone(), |word: &&str| word.len());

  assert_eq!(pipe.collect_values(), Ok(words));
  assert_eq!(table.count(&2), 3);
  assert_eq!(table.count(&1), 1);
  assert_eq!(pipe.table().count(&3), 1);
}
