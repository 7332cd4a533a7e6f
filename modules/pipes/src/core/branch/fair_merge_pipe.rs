use alloc::vec::Vec;

use crate::core::{Path, Pipe, PipeDslError, PipeError, StageKind, StageSlot, upstream_current};

#[cfg(test)]
mod tests;

/// Round-robin merge over several upstreams.
///
/// Each advance tries the upstreams starting after the one that produced the previous element.
/// Exhausted upstreams are skipped; a full rotation without an element exhausts the merge.
pub struct FairMergePipe<P>
where
  P: Pipe, {
  upstreams: Vec<P>,
  cursor:    usize,
  slot:      StageSlot<P::Item>,
}

impl<P> FairMergePipe<P>
where
  P: Pipe,
{
  /// Creates a fair merge.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `upstreams` is empty.
  pub fn new(upstreams: Vec<P>) -> Result<Self, PipeDslError> {
    if upstreams.is_empty() {
      return Err(PipeDslError::invalid_argument("upstreams", "must not be empty"));
    }
    Ok(Self { upstreams, cursor: 0, slot: StageSlot::new() })
  }
}

impl<P> Pipe for FairMergePipe<P>
where
  P: Pipe,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    let count = self.upstreams.len();
    for _ in 0..count {
      let index = self.cursor;
      self.cursor = (self.cursor + 1) % count;
      let Some(upstream) = self.upstreams.get_mut(index) else {
        continue;
      };
      if upstream.advance()? {
        let value = upstream_current(upstream)?.clone();
        return Ok(self.slot.emit_passthrough(value, upstream.path()));
      }
    }
    Ok(self.slot.exhaust())
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.upstreams.iter_mut().for_each(|upstream| upstream.reset());
    self.cursor = 0;
    self.slot.reset();
  }

  fn enable_path(&mut self, enabled: bool) {
    self.upstreams.iter_mut().for_each(|upstream| upstream.enable_path(enabled));
    self.slot.set_path_enabled(enabled);
  }

  fn path(&self) -> Option<&Path> {
    self.slot.path()
  }

  fn kind(&self) -> StageKind {
    StageKind::Merge
  }
}
