use alloc::vec::Vec;

use crate::core::{Path, Pipe, PipeDslError, PipeError, StageKind, StageSlot, upstream_current};

#[cfg(test)]
mod tests;

/// Drains each upstream fully before moving to the next one.
pub struct ExhaustMergePipe<P>
where
  P: Pipe, {
  upstreams: Vec<P>,
  index:     usize,
  slot:      StageSlot<P::Item>,
}

impl<P> ExhaustMergePipe<P>
where
  P: Pipe,
{
  /// Creates an exhaust merge.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `upstreams` is empty.
  pub fn new(upstreams: Vec<P>) -> Result<Self, PipeDslError> {
    if upstreams.is_empty() {
      return Err(PipeDslError::invalid_argument("upstreams", "must not be empty"));
    }
    Ok(Self { upstreams, index: 0, slot: StageSlot::new() })
  }
}

impl<P> Pipe for ExhaustMergePipe<P>
where
  P: Pipe,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    while let Some(upstream) = self.upstreams.get_mut(self.index) {
      if upstream.advance()? {
        let value = upstream_current(upstream)?.clone();
        return Ok(self.slot.emit_passthrough(value, upstream.path()));
      }
      self.index += 1;
    }
    Ok(self.slot.exhaust())
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.upstreams.iter_mut().for_each(|upstream| upstream.reset());
    self.index = 0;
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
