use core::hash::Hash;

use ahash::RandomState;
use hashbrown::HashSet;

#[cfg(test)]
mod tests;

/// Set of keys already emitted by a duplicate filter.
#[derive(Debug, Clone)]
pub struct SeenSet<K> {
  keys: HashSet<K, RandomState>,
}

impl<K> SeenSet<K>
where
  K: Eq + Hash,
{
  /// Creates an empty set.
  #[must_use]
  pub fn new() -> Self {
    Self { keys: HashSet::with_hasher(RandomState::new()) }
  }

  /// Records `key`, returning `true` when it was not seen before.
  pub fn insert(&mut self, key: K) -> bool {
    self.keys.insert(key)
  }

  /// Returns `true` when `key` was already recorded.
  #[must_use]
  pub fn contains(&self, key: &K) -> bool {
    self.keys.contains(key)
  }

  /// Returns the number of distinct keys recorded.
  #[must_use]
  pub fn len(&self) -> usize {
    self.keys.len()
  }

  /// Returns `true` when nothing was recorded.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.keys.is_empty()
  }

  /// Forgets every recorded key.
  pub fn clear(&mut self) {
    self.keys.clear();
  }
}

impl<K> Default for SeenSet<K>
where
  K: Eq + Hash,
{
  fn default() -> Self {
    Self::new()
  }
}
