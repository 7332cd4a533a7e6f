use core::marker::PhantomData;

use crate::core::{Path, Pipe, PipeElement, PipeError, StageKind, StageSlot, upstream_current};

#[cfg(test)]
mod tests;

/// Applies a function to every upstream element.
pub struct MapPipe<P, F, Out>
where
  P: Pipe, {
  upstream: P,
  mapper:   F,
  slot:     StageSlot<Out>,
  _marker:  PhantomData<fn(P::Item) -> Out>,
}

impl<P, F, Out> MapPipe<P, F, Out>
where
  P: Pipe,
  F: FnMut(&P::Item) -> Out + Send,
  Out: PipeElement,
{
  /// Creates a transform stage over `upstream`.
  #[must_use]
  pub const fn new(upstream: P, mapper: F) -> Self {
    Self { upstream, mapper, slot: StageSlot::new(), _marker: PhantomData }
  }
}

impl<P, F, Out> Pipe for MapPipe<P, F, Out>
where
  P: Pipe,
  F: FnMut(&P::Item) -> Out + Send,
  Out: PipeElement,
{
  type Item = Out;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() || !self.upstream.advance()? {
      return Ok(self.slot.exhaust());
    }
    let mapped = (self.mapper)(upstream_current(&self.upstream)?);
    Ok(self.slot.emit_extended(mapped, self.upstream.path()))
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
