use alloc::vec::{IntoIter, Vec};
use core::iter::{Once, once};

use crate::core::{Path, Pipe, PipeElement, PipeError, StageKind, StageSlot};


/// Source adapter over a cloneable iterator.
///
/// The original iterator is kept so that [`reset`](Pipe::reset) can restart the sequence.
pub struct IterSource<I>
where
  I: Iterator, {
  origin: I,
  live:   I,
  slot:   StageSlot<I::Item>,
}

impl<I> IterSource<I>
where
  I: Iterator + Clone + Send,
  I::Item: PipeElement,
{
  /// Wraps a cloneable iterator.
  #[must_use]
  pub fn new(iter: I) -> Self {
    Self { live: iter.clone(), origin: iter, slot: StageSlot::new() }
  }
}

impl<T> IterSource<IntoIter<T>>
where
  T: PipeElement,
{
  /// Creates a source emitting the provided values in order.
  #[must_use]
  pub fn from_values(values: Vec<T>) -> Self {
    Self::new(values.into_iter())
  }
}

impl<T> IterSource<Once<T>>
where
  T: PipeElement,
{
  /// Creates a source emitting exactly one value.
  #[must_use]
  pub fn single(value: T) -> Self {
    Self::new(once(value))
  }
}

impl<I> Pipe for IterSource<I>
where
  I: Iterator + Clone + Send,
  I::Item: PipeElement,
{
  type Item = I::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    match self.live.next() {
      | Some(value) => Ok(self.slot.emit_extended(value, None)),
      | None => Ok(self.slot.exhaust()),
    }
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.live = self.origin.clone();
    self.slot.reset();
  }

  fn enable_path(&mut self, enabled: bool) {
    self.slot.set_path_enabled(enabled);
  }

  fn path(&self) -> Option<&Path> {
    self.slot.path()
  }

  fn kind(&self) -> StageKind {
    StageKind::Source
  }
}
