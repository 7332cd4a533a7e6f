use alloc::collections::VecDeque;
use core::marker::PhantomData;

use crate::core::{Path, Pipe, PipeElement, PipeError, StageKind, StageSlot, upstream_current};


/// Expands every upstream element into zero or more outputs.
///
/// Outputs of one upstream element are buffered and drained before the upstream is advanced
/// again, so an element with no outputs costs one extra upstream advance.
pub struct FlatMapPipe<P, F, I>
where
  P: Pipe,
  I: IntoIterator, {
  upstream: P,
  expander: F,
  pending:  VecDeque<I::Item>,
  origin:   Option<Path>,
  slot:     StageSlot<I::Item>,
  _marker:  PhantomData<fn(P::Item) -> I>,
}

impl<P, F, I> FlatMapPipe<P, F, I>
where
  P: Pipe,
  F: FnMut(&P::Item) -> I + Send,
  I: IntoIterator,
  I::Item: PipeElement,
{
  /// Creates an expanding stage over `upstream`.
  #[must_use]
  pub const fn new(upstream: P, expander: F) -> Self {
    Self { upstream, expander, pending: VecDeque::new(), origin: None, slot: StageSlot::new(), _marker: PhantomData }
  }
}

impl<P, F, I> Pipe for FlatMapPipe<P, F, I>
where
  P: Pipe,
  F: FnMut(&P::Item) -> I + Send,
  I: IntoIterator,
  I::Item: PipeElement,
{
  type Item = I::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    loop {
      if let Some(value) = self.pending.pop_front() {
        return Ok(self.slot.emit_extended(value, self.origin.as_ref()));
      }
      if !self.upstream.advance()? {
        return Ok(self.slot.exhaust());
      }
      self.pending.extend((self.expander)(upstream_current(&self.upstream)?));
      self.origin = self.upstream.path().cloned();
    }
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.upstream.reset();
    self.pending.clear();
    self.origin = None;
    self.slot.reset();
  }

  fn enable_path(&mut self, enabled: bool) {
    self.upstream.enable_path(enabled);
    self.slot.set_path_enabled(enabled);
  }

  fn path(&self) -> Option<&Path> {
    self.slot.path()
  }

  fn kind(&self) -> StageKind {
    StageKind::Transform
  }
}
