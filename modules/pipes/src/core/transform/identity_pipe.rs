use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};

#[cfg(test)]
mod tests;

/// Forwards every upstream element, recording it as a new path entry.
pub struct IdentityPipe<P>
where
  P: Pipe, {
  upstream: P,
  slot:     StageSlot<P::Item>,
}

impl<P> IdentityPipe<P>
where
  P: Pipe,
{
  /// Wraps `upstream`.
  #[must_use]
  pub const fn new(upstream: P) -> Self {
    Self { upstream, slot: StageSlot::new() }
  }
}

impl<P> Pipe for IdentityPipe<P>
where
  P: Pipe,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() || !self.upstream.advance()? {
      return Ok(self.slot.exhaust());
    }
    let value = upstream_current(&self.upstream)?.clone();
    Ok(self.slot.emit_extended(value, self.upstream.path()))
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
    StageKind::Transform
  }
}
