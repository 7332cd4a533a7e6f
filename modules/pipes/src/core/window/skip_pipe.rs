use core::sync::atomic::Ordering;

use portable_atomic::AtomicUsize;

use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};


/// Drops the first `count` upstream elements and forwards the rest.
pub struct SkipPipe<P>
where
  P: Pipe, {
  upstream: P,
  count:    usize,
  skipped:  AtomicUsize,
  slot:     StageSlot<P::Item>,
}

impl<P> SkipPipe<P>
where
  P: Pipe,
{
  /// Creates a skip stage.
  #[must_use]
  pub const fn new(upstream: P, count: usize) -> Self {
    Self { upstream, count, skipped: AtomicUsize::new(0), slot: StageSlot::new() }
  }

  /// Returns the number of elements dropped so far.
  #[must_use]
  pub fn skipped(&self) -> usize {
    self.skipped.load(Ordering::Acquire)
  }
}

impl<P> Pipe for SkipPipe<P>
where
  P: Pipe,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    while self.skipped.load(Ordering::Acquire) < self.count {
      if !self.upstream.advance()? {
        return Ok(self.slot.exhaust());
      }
      self.skipped.fetch_add(1, Ordering::AcqRel);
    }
    if !self.upstream.advance()? {
      return Ok(self.slot.exhaust());
    }
    let value = upstream_current(&self.upstream)?.clone();
    Ok(self.slot.emit_passthrough(value, self.upstream.path()))
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.upstream.reset();
    self.skipped.store(0, Ordering::Release);
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
    StageKind::Window
  }
}
