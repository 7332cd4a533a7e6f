use alloc::{sync::Arc, vec::Vec};
use core::{any::Any, fmt};

use super::{PipeElement, PipeError};

#[cfg(test)]
mod tests;

/// Type-erased value recorded in a [`Path`].
pub type PathValue = Arc<dyn Any + Send + Sync>;

/// Immutable snapshot of every value produced for the current position of a stage.
///
/// Entries are ordered oldest first; the last entry is the value produced by the stage that
/// exposes the path. Extending a path allocates a new snapshot, so a stage can hand out its path
/// while upstream stages move on.
#[derive(Clone)]
pub struct Path {
  entries: Arc<Vec<PathValue>>,
}

impl Path {
  /// Creates a path holding a single entry.
  #[must_use]
  pub fn root<T>(value: T) -> Self
  where
    T: PipeElement, {
    Self { entries: Arc::new(alloc::vec![Arc::new(value) as PathValue]) }
  }

  /// Returns a new snapshot with `value` appended.
  #[must_use]
  pub fn extended<T>(&self, value: T) -> Self
  where
    T: PipeElement, {
    let mut entries = Vec::with_capacity(self.entries.len() + 1);
    entries.extend(self.entries.iter().cloned());
    entries.push(Arc::new(value) as PathValue);
    Self { entries: Arc::new(entries) }
  }

  /// Extends `base` with `value`, or starts a new path when there is no base.
  #[must_use]
  pub fn extend_or_root<T>(base: Option<&Path>, value: T) -> Self
  where
    T: PipeElement, {
    match base {
      | Some(path) => path.extended(value),
      | None => Self::root(value),
    }
  }

  /// Returns the number of recorded entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no entry has been recorded.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Returns the entry at `index`, oldest first.
  ///
  /// # Errors
  ///
  /// Returns [`PipeError::NoSuchElement`] when `index` is out of bounds and
  /// [`PipeError::TypeMismatch`] when the entry holds another type.
  pub fn get<T>(&self, index: usize) -> Result<&T, PipeError>
  where
    T: PipeElement, {
    let entry = self.entries.get(index).ok_or(PipeError::NoSuchElement)?;
    entry.downcast_ref::<T>().ok_or(PipeError::TypeMismatch)
  }

  /// Returns the entry `steps` positions before the last one.
  ///
  /// `back(0)` is the current value.
  ///
  /// # Errors
  ///
  /// Returns [`PipeError::NoSuchElement`] when `steps` reaches past the recorded depth and
  /// [`PipeError::TypeMismatch`] when the entry holds another type.
  pub fn back<T>(&self, steps: usize) -> Result<&T, PipeError>
  where
    T: PipeElement, {
    let index = self.back_index(steps).ok_or(PipeError::NoSuchElement)?;
    self.get(index)
  }

  /// Returns `true` when an entry exists `steps` positions before the last one.
  #[must_use]
  pub fn reaches_back(&self, steps: usize) -> bool {
    self.back_index(steps).is_some()
  }

  /// Returns the raw entry at `index`.
  #[must_use]
  pub fn raw(&self, index: usize) -> Option<&PathValue> {
    self.entries.get(index)
  }

  /// Iterates over the raw entries, oldest first.
  pub fn iter(&self) -> impl Iterator<Item = &PathValue> {
    self.entries.iter()
  }

  fn back_index(&self, steps: usize) -> Option<usize> {
    self.entries.len().checked_sub(1)?.checked_sub(steps)
  }
}

impl fmt::Debug for Path {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Path").field("len", &self.entries.len()).finish()
  }
}
