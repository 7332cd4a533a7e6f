use alloc::{collections::VecDeque, sync::Arc};

use spin::Mutex;

use crate::core::{Path, Pipe, PipeElement, PipeError, StageKind, StageSlot};


/// Refillable source whose pending queue is shared between clones.
///
/// A clone observes every value pushed through any handle, but keeps its own current-element
/// slot. Sub-pipelines built on a feed are driven by pushing one element and resetting the chain.
pub struct FeedSource<T> {
  queue: Arc<Mutex<VecDeque<T>>>,
  slot:  StageSlot<T>,
}

impl<T> FeedSource<T>
where
  T: PipeElement,
{
  /// Creates an empty feed.
  #[must_use]
  pub fn new() -> Self {
    Self { queue: Arc::new(Mutex::new(VecDeque::new())), slot: StageSlot::new() }
  }

  /// Queues a value for the next advance.
  pub fn push(&self, value: T) {
    self.queue.lock().push_back(value);
  }

  /// Drops every pending value.
  pub fn clear(&self) {
    self.queue.lock().clear();
  }

  /// Returns the number of pending values.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.queue.lock().len()
  }
}

impl<T> Clone for FeedSource<T>
where
  T: PipeElement,
{
  fn clone(&self) -> Self {
    Self { queue: self.queue.clone(), slot: StageSlot::new() }
  }
}

impl<T> Default for FeedSource<T>
where
  T: PipeElement,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Pipe for FeedSource<T>
where
  T: PipeElement,
{
  type Item = T;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    let next = self.queue.lock().pop_front();
    match next {
      | Some(value) => Ok(self.slot.emit_extended(value, None)),
      | None => Ok(self.slot.exhaust()),
    }
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
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
