use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};

#[cfg(test)]
mod tests;

/// Keeps the upstream elements matching a predicate.
pub struct FilterPipe<P, F>
where
  P: Pipe, {
  upstream:  P,
  predicate: F,
  slot:      StageSlot<P::Item>,
}

impl<P, F> FilterPipe<P, F>
where
  P: Pipe,
  F: FnMut(&P::Item) -> bool + Send,
{
  /// Creates a predicate filter over `upstream`.
  #[must_use]
  pub const fn new(upstream: P, predicate: F) -> Self {
    Self { upstream, predicate, slot: StageSlot::new() }
  }
}

impl<P, F> Pipe for FilterPipe<P, F>
where
  P: Pipe,
  F: FnMut(&P::Item) -> bool + Send,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    while self.upstream.advance()? {
      let value = upstream_current(&self.upstream)?;
      if (self.predicate)(value) {
        let value = value.clone();
        return Ok(self.slot.emit_passthrough(value, self.upstream.path()));
      }
    }
    Ok(self.slot.exhaust())
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
    StageKind::Filter
  }
}
