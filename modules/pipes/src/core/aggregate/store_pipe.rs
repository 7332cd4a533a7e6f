use super::SideEffectBuffer;
use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};

#[cfg(test)]
mod tests;

/// Forwards every upstream element and appends it to a buffer on the way.
pub struct StorePipe<P>
where
  P: Pipe, {
  upstream: P,
  buffer:   SideEffectBuffer<P::Item>,
  slot:     StageSlot<P::Item>,
}

impl<P> StorePipe<P>
where
  P: Pipe,
{
  /// Creates a storing stage.
  #[must_use]
  pub const fn new(upstream: P, buffer: SideEffectBuffer<P::Item>) -> Self {
    Self { upstream, buffer, slot: StageSlot::new() }
  }

  /// Returns the side-effect buffer.
  #[must_use]
  pub const fn buffer(&self) -> &SideEffectBuffer<P::Item> {
    &self.buffer
  }
}

impl<P> Pipe for StorePipe<P>
where
  P: Pipe,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() || !self.upstream.advance()? {
      return Ok(self.slot.exhaust());
    }
    let value = upstream_current(&self.upstream)?.clone();
    self.buffer.push(value.clone());
    Ok(self.slot.emit_passthrough(value, self.upstream.path()))
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.upstream.reset();
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
