use alloc::collections::VecDeque;

use super::SideEffectBuffer;
use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};

#[cfg(test)]
mod tests;

/// Drains the whole upstream into a buffer on first advance, then replays it.
///
/// The stage is a barrier: nothing is emitted before the upstream is exhausted. Replayed elements
/// keep the paths they had upstream. [`reset`](Pipe::reset) restarts the upstream but leaves the
/// buffer content to the caller.
pub struct AggregatePipe<P>
where
  P: Pipe, {
  upstream: P,
  buffer:   SideEffectBuffer<P::Item>,
  replay:   VecDeque<(P::Item, Option<Path>)>,
  drained:  bool,
  slot:     StageSlot<P::Item>,
}

impl<P> AggregatePipe<P>
where
  P: Pipe,
{
  /// Creates an aggregating stage with a fresh buffer.
  #[must_use]
  pub fn new(upstream: P) -> Self {
    Self::with_buffer(upstream, SideEffectBuffer::new())
  }

  /// Creates an aggregating stage collecting into `buffer`.
  #[must_use]
  pub fn with_buffer(upstream: P, buffer: SideEffectBuffer<P::Item>) -> Self {
    Self { upstream, buffer, replay: VecDeque::new(), drained: false, slot: StageSlot::new() }
  }

  /// Returns the side-effect buffer.
  #[must_use]
  pub const fn buffer(&self) -> &SideEffectBuffer<P::Item> {
    &self.buffer
  }

  fn drain_upstream(&mut self) -> Result<(), PipeError> {
    while self.upstream.advance()? {
      let value = upstream_current(&self.upstream)?.clone();
      self.buffer.push(value.clone());
      self.replay.push_back((value, self.upstream.path().cloned()));
    }
    self.drained = true;
    Ok(())
  }
}

impl<P> Pipe for AggregatePipe<P>
where
  P: Pipe,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    if !self.drained {
      self.drain_upstream()?;
    }
    match self.replay.pop_front() {
      | Some((value, path)) => Ok(self.slot.emit_with_path(value, path)),
      | None => Ok(self.slot.exhaust()),
    }
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.upstream.reset();
    self.replay.clear();
    self.drained = false;
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
    StageKind::Aggregate
  }
}
