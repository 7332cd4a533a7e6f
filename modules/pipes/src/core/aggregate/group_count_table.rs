use alloc::{sync::Arc, vec::Vec};
use core::hash::Hash;

use ahash::RandomState;
use hashbrown::HashMap;
use spin::Mutex;


/// Shared occurrence counts per key.
///
/// Clones refer to the same table.
pub struct GroupCountTable<K> {
  counts: Arc<Mutex<HashMap<K, usize, RandomState>>>,
}

impl<K> GroupCountTable<K>
where
  K: Eq + Hash + Clone,
{
  /// Creates an empty table.
  #[must_use]
  pub fn new() -> Self {
    Self { counts: Arc::new(Mutex::new(HashMap::with_hasher(RandomState::new()))) }
  }

  /// Increments the count of `key` and returns the new count.
  pub fn increment(&self, key: K) -> usize {
    let mut counts = self.counts.lock();
    let count = counts.entry(key).or_insert(0);
    *count += 1;
    *count
  }

  /// Returns the count recorded for `key`.
  #[must_use]
  pub fn count(&self, key: &K) -> usize {
    self.counts.lock().get(key).copied().unwrap_or(0)
  }

  /// Returns a copy of every `(key, count)` pair, in no particular order.
  #[must_use]
  pub fn snapshot(&self) -> Vec<(K, usize)> {
    self.counts.lock().iter().map(|(key, count)| (key.clone(), *count)).collect()
  }

  /// Returns the number of distinct keys.
  #[must_use]
  pub fn len(&self) -> usize {
    self.counts.lock().len()
  }

  /// Returns `true` when nothing was counted.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.counts.lock().is_empty()
  }

  /// Removes every count.
  pub fn clear(&self) {
    self.counts.lock().clear();
  }
}

impl<K> Clone for GroupCountTable<K> {
  fn clone(&self) -> Self {
    Self { counts: self.counts.clone() }
  }
}

impl<K> Default for GroupCountTable<K>
where
  K: Eq + Hash + Clone,
{
  fn default() -> Self {
    Self::new()
  }
}
