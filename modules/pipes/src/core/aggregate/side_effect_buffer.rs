use alloc::{sync::Arc, vec::Vec};

use spin::Mutex;


/// Shared collection filled by aggregating stages.
///
/// Clones refer to the same underlying buffer.
pub struct SideEffectBuffer<T> {
  values: Arc<Mutex<Vec<T>>>,
}

impl<T> SideEffectBuffer<T>
where
  T: Clone,
{
  /// Creates an empty buffer.
  #[must_use]
  pub fn new() -> Self {
    Self { values: Arc::new(Mutex::new(Vec::new())) }
  }

  /// Appends a value.
  pub fn push(&self, value: T) {
    self.values.lock().push(value);
  }

  /// Returns a copy of the collected values.
  #[must_use]
  pub fn snapshot(&self) -> Vec<T> {
    self.values.lock().clone()
  }

  /// Returns the number of collected values.
  #[must_use]
  pub fn len(&self) -> usize {
    self.values.lock().len()
  }

  /// Returns `true` when nothing was collected.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.values.lock().is_empty()
  }

  /// Removes every collected value.
  pub fn clear(&self) {
    self.values.lock().clear();
  }
}

impl<T> Clone for SideEffectBuffer<T> {
  fn clone(&self) -> Self {
    Self { values: self.values.clone() }
  }
}

impl<T> Default for SideEffectBuffer<T>
where
  T: Clone,
{
  fn default() -> Self {
    Self::new()
  }
}
