use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};


/// Forwards every upstream element after handing it to a function.
pub struct SideEffectPipe<P, F>
where
  P: Pipe, {
  upstream: P,
  effect:   F,
  slot:     StageSlot<P::Item>,
}

impl<P, F> SideEffectPipe<P, F>
where
  P: Pipe,
  F: FnMut(&P::Item) + Send,
{
  /// Creates a side-effect stage.
  #[must_use]
  pub const fn new(upstream: P, effect: F) -> Self {
    Self { upstream, effect, slot: StageSlot::new() }
  }
}

impl<P, F> Pipe for SideEffectPipe<P, F>
where
  P: Pipe,
  F: FnMut(&P::Item) + Send,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() || !self.upstream.advance()? {
      return Ok(self.slot.exhaust());
    }
    let value = upstream_current(&self.upstream)?;
    (self.effect)(value);
    let value = value.clone();
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
